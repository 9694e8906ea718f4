//! Keyword → emoji table.

/// Keywords searched for in normalized subject names. Order matters between
/// keywords of equal length: the earlier one wins.
const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("numerique", "💻"),
    ("SI", "💻"),
    ("SNT", "💻"),
    ("travaux", "⚒"),
    ("travail", "💼"),
    ("moral", "⚖️"),
    ("env", "🌿"),
    ("sport", "🏀"),
    ("EPS", "🏀"),
    ("econo", "📈"),
    ("francais", "📚"),
    ("anglais", "🇬🇧"),
    ("allemand", "🇩🇪"),
    ("espagnol", "🇪🇸"),
    ("latin", "🏛️"),
    ("italien", "🇮🇹"),
    ("histoire", "📜"),
    ("EMC", "🤝"),
    ("hist", "📜"),
    ("llc", "🌍"),
    ("scientifique", "🔬"),
    ("arts", "🎨"),
    ("philosophie", "🤔"),
    ("math", "📐"),
    ("phys", "🧪"),
    ("accomp", "👨‍🏫"),
    ("tech", "🔧"),
    ("ingenieur", "🔧"),
    ("musique", "🎼"),
    ("musical", "🎼"),
    ("classe", "🏫"),
    ("vie", "🧬"),
    ("SES", "💰"),
    ("stage", "👔"),
    ("œuvre", "🖼️"),
    (DEFAULT_KEYWORD, "📝"),
    ("developpement", "👨‍💻"),
    ("culture", "🧠"),
    ("gestion", "💼"),
    ("traitement", "📊"),
    ("sae", "📚"),
    ("expression", "🎭"),
    ("ppp", "🧑‍🏫"),
];

const DEFAULT_KEYWORD: &str = "default";

/// Keywords ordered longest first, ties kept in table order.
fn keywords_by_length() -> Vec<(&'static str, &'static str)> {
    let mut keywords = EMOJI_KEYWORDS.to_vec();
    keywords.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    keywords
}

/// Keyword of the table matched by `subject`, longest keyword first.
///
/// Matching is a case-sensitive substring search, so upper-case acronyms
/// only match names that kept their capitals.
pub fn matching_keyword(subject: &str) -> &'static str {
    keywords_by_length()
        .into_iter()
        .find(|(keyword, _)| subject.contains(keyword))
        .map_or(DEFAULT_KEYWORD, |(keyword, _)| keyword)
}

/// Emoji for an already normalized subject name.
pub fn closest_emoji(subject: &str) -> &'static str {
    let keyword = matching_keyword(subject);
    EMOJI_KEYWORDS
        .iter()
        .find(|(candidate, _)| *candidate == keyword)
        .map_or("📝", |(_, emoji)| *emoji)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subjects::normalize_subject;

    #[test]
    fn test_mathematics() {
        let subject = normalize_subject("Mathématiques appliquées");
        assert_eq!(matching_keyword(&subject), "math");
        assert_eq!(closest_emoji(&subject), "📐");
    }

    #[test]
    fn test_physical_education() {
        let subject = normalize_subject("Éducation physique et sportive");
        assert_eq!(matching_keyword(&subject), "sport");
        assert_eq!(closest_emoji(&subject), "🏀");
    }

    #[test]
    fn test_longest_keyword_wins() {
        // "histoire" (8) beats "hist" (4)
        assert_eq!(matching_keyword("histoire-geographie"), "histoire");
        // "travail" and "travaux" are both 7 long; only one matches here
        assert_eq!(matching_keyword("travaux pratiques"), "travaux");
    }

    #[test]
    fn test_acronyms_are_case_sensitive() {
        assert_eq!(closest_emoji("EPS"), "🏀");
        assert_eq!(closest_emoji("SES"), "💰");
        assert_eq!(matching_keyword("eps"), DEFAULT_KEYWORD);
    }

    #[test]
    fn test_no_match_falls_back_to_default() {
        assert_eq!(closest_emoji("zzz"), "📝");
    }

    #[test]
    fn test_oe_ligature_survives_normalization() {
        let subject = normalize_subject("Étude d'une Œuvre");
        assert_eq!(closest_emoji(&subject), "🖼️");
    }
}

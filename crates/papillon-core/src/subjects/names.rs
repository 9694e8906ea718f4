//! Subject name normalization and display names.

use unicode_normalization::UnicodeNormalization;

/// Lower-cases `entry`, trims it and strips combining diacritical marks
/// (U+0300..=U+036F) after canonical decomposition.
pub fn normalize_subject(entry: &str) -> String {
    entry
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Normalized vendor subject labels with a conventional display name.
const KNOWN_SUBJECTS: &[(&str, &str)] = &[
    ("mathematiques", "Mathématiques"),
    ("maths", "Mathématiques"),
    ("francais", "Français"),
    ("histoire-geographie", "Histoire-Géographie"),
    ("histoire geographie", "Histoire-Géographie"),
    ("histoire & geographie", "Histoire-Géographie"),
    ("hist.-geo.", "Histoire-Géographie"),
    ("education physique et sportive", "EPS"),
    ("ed.physique & sport.", "EPS"),
    ("eps", "EPS"),
    ("physique-chimie", "Physique-Chimie"),
    ("physique chimie", "Physique-Chimie"),
    ("sciences de la vie et de la terre", "SVT"),
    ("svt", "SVT"),
    ("sciences vie & terre", "SVT"),
    ("sciences economiques et sociales", "SES"),
    ("ses", "SES"),
    ("enseignement moral et civique", "EMC"),
    ("enseignement moral & civique", "EMC"),
    ("emc", "EMC"),
    ("anglais lv1", "Anglais"),
    ("anglais", "Anglais"),
    ("espagnol lv2", "Espagnol"),
    ("espagnol", "Espagnol"),
    ("allemand lv2", "Allemand"),
    ("allemand", "Allemand"),
    ("italien lv2", "Italien"),
    ("philosophie", "Philosophie"),
    ("technologie", "Technologie"),
    ("education musicale", "Éducation musicale"),
    ("arts plastiques", "Arts plastiques"),
    ("sciences numeriques et technologie", "SNT"),
    ("snt", "SNT"),
    ("accompagnement personnalise", "Accompagnement personnalisé"),
    ("vie de classe", "Vie de classe"),
];

/// Display name for a subject. `subject` is the normalized key, `entry` the
/// raw label it came from.
pub fn pretty_name(subject: &str, entry: &str) -> String {
    if let Some((_, pretty)) = KNOWN_SUBJECTS.iter().find(|(key, _)| *key == subject) {
        return (*pretty).to_string();
    }

    let mut chars = entry.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize_subject("  Éducation Physique  "), "education physique");
        assert_eq!(normalize_subject("FRANÇAIS"), "francais");
        assert_eq!(normalize_subject("   "), "");
    }

    #[test]
    fn test_known_subject_pretty_name() {
        assert_eq!(pretty_name("mathematiques", "MATHEMATIQUES"), "Mathématiques");
        assert_eq!(
            pretty_name("histoire-geographie", "HISTOIRE-GEOGRAPHIE"),
            "Histoire-Géographie"
        );
    }

    #[test]
    fn test_unknown_subject_keeps_entry_with_capital() {
        assert_eq!(
            pretty_name("mathematiques appliquees", " mathématiques appliquées"),
            "Mathématiques appliquées"
        );
        assert_eq!(pretty_name("", ""), "");
    }
}

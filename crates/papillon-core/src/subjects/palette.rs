//! Subject colour palette.

use rand::{seq::IndexedRandom, Rng};

/// Colours handed out to subjects, in display order.
pub const PALETTE: [&str; 22] = [
    "#D1005A", "#BE4541", "#D54829", "#F46E00", "#B2641F", "#D18800", "#BEA541", "#E5B21A",
    "#B2BE41", "#94BE41", "#5CB21F", "#32CB10", "#1FB28B", "#6DA2E3", "#0099D1", "#1F6DB2",
    "#4E339E", "#7941BE", "#CC33BF", "#BE417F", "#E36DB8", "#7F7F7F",
];

/// Picks a random palette colour not in `used`. Once every colour is taken,
/// any palette colour may be returned.
pub fn pick_color<R: Rng + ?Sized>(used: &[&str], rng: &mut R) -> &'static str {
    let available: Vec<&'static str> = PALETTE
        .iter()
        .copied()
        .filter(|color| !used.contains(color))
        .collect();

    let pool: &[&'static str] = if available.is_empty() {
        &PALETTE
    } else {
        &available
    };
    pool.choose(rng).copied().unwrap_or(PALETTE[0])
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_never_repeats_until_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut used: Vec<&str> = Vec::new();

        for _ in 0..PALETTE.len() {
            let color = pick_color(&used, &mut rng);
            assert!(!used.contains(&color), "{color} handed out twice");
            used.push(color);
        }

        let mut sorted = used.clone();
        sorted.sort_unstable();
        let mut expected = PALETTE.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);

        // Exhausted: reuse is allowed but the colour still comes from the palette
        let reused = pick_color(&used, &mut rng);
        assert!(PALETTE.contains(&reused));
    }

    #[test]
    fn test_last_free_colour_is_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        let used: Vec<&str> = PALETTE.iter().copied().filter(|c| *c != "#1F6DB2").collect();

        assert_eq!(pick_color(&used, &mut rng), "#1F6DB2");
    }
}

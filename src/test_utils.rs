use crate::types::Source;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SYLLABLES: [&str; 16] = [
    "ka", "lo", "mi", "nu", "pe", "ra", "si", "to", "ve", "zu", "an", "el", "or", "ix", "ub", "ey",
];

/// Generate a pseudo-word of 2-4 syllables
pub fn generate_word_with_rng(rng: &mut impl Rng) -> String {
    let syllables = rng.gen_range(2..=4);
    (0..syllables)
        .map(|_| SYLLABLES[rng.gen_range(0..SYLLABLES.len())])
        .collect()
}

/// Generate `count` distinct lines for a source named `name`.
///
/// Each line is a pseudo-word tagged with its index so the lines stay
/// distinct and traceable back to the source.
pub fn generate_word_lines_with_seed(name: &str, count: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|i| format!("{}-{}-{}", name, generate_word_with_rng(&mut rng), i))
        .collect()
}

/// Generate `sources` word-list sources of `lines_per_source` lines each.
///
/// # Panics
///
/// Panics if `lines_per_source` is zero.
pub fn generate_sources_with_seed(sources: usize, lines_per_source: usize, seed: u64) -> Vec<Source> {
    (0..sources)
        .map(|i| {
            let name = format!("s{}", i);
            let lines = generate_word_lines_with_seed(&name, lines_per_source, Some(seed + i as u64));
            Source::new(name, lines).expect("generated sources are non-empty")
        })
        .collect()
}

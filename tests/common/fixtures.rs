//! Static and generated group-name corpora used across harnesses.

use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::Fake;

/// Hand-picked names with overlapping three-letter runs.
pub const CORPUS_COMMUNITY: &[&str] = &[
    "rustaceans",
    "rust belt rustaceans",
    "trusty hikers",
    "crustacean biologists",
    "board game night",
    "boardwalk runners",
    "chess club",
    "chessboxing league",
    "book club",
    "cookbook swap",
    "photography walks",
    "astrophotography",
];

/// `n` random multi-word names.
pub fn fake_names(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                CompanyName().fake::<String>().to_ascii_lowercase()
            } else {
                let a: String = Word().fake();
                let b: String = Word().fake();
                format!("{a} {b}")
            }
        })
        .collect()
}

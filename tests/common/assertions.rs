//! Ranking assertions.
//!
//! [`reference_score`] recomputes a group's score outside SQL so harnesses can
//! check the store's ranking without trusting it.

use groupsearch_core::chunk;

/// Number of `width`-chunks of `term` contained in `name`, compared the way
/// SQLite's default `LIKE` does (ASCII case-insensitive).
pub fn reference_score(name: &str, term: &str, width: usize) -> usize {
    let name = name.to_ascii_lowercase();
    chunk(term, width)
        .into_iter()
        .filter(|c| name.contains(&c.to_ascii_lowercase()))
        .count()
}

/// Assert that `names` is a valid ranked result for `term`: every score is
/// positive and scores never increase down the list.
pub fn assert_ranked(names: &[String], term: &str, width: usize) {
    let scores: Vec<usize> = names
        .iter()
        .map(|n| reference_score(n, term, width))
        .collect();

    if let Some(pos) = scores.iter().position(|&s| s == 0) {
        panic!(
            "assert_ranked failed: {:?} scored 0 for term {:?} but was returned.\n  results: {:?}",
            names[pos], term, names
        );
    }
    for (i, pair) in scores.windows(2).enumerate() {
        if pair[0] < pair[1] {
            panic!(
                "assert_ranked failed: {:?} (score {}) ranked above {:?} (score {}) for term {:?}",
                names[i], pair[0], names[i + 1], pair[1], term
            );
        }
    }
}

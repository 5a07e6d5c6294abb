//! Chunker — splits a search term into fixed-width substring probes.
//!
//! `"abcdefg"` at width 3 becomes `["abc", "def", "g"]`. Each chunk is later
//! matched independently against group names, so order only matters for
//! reproducible parameter lists.

use crate::types::SearchTerm;

/// Split `term` into `ceil(len / width)` chunks of `width` characters; the last
/// chunk holds the remainder.
///
/// Boundaries fall on `char` boundaries, never inside a multi-byte sequence.
/// An empty `term` yields no chunks.
///
/// # Panics
///
/// Panics if `width` is zero. [`SearchConfig::validate`](crate::SearchConfig::validate)
/// rejects that at load time.
pub fn chunk(term: &str, width: usize) -> Vec<&str> {
    assert!(width > 0, "chunk width must be non-zero");

    let mut chunks = Vec::with_capacity(term.len() / width + 1);
    let mut start = 0;
    for (n, (idx, _)) in term.char_indices().enumerate() {
        if n > 0 && n % width == 0 {
            chunks.push(&term[start..idx]);
            start = idx;
        }
    }
    if start < term.len() {
        chunks.push(&term[start..]);
    }
    chunks
}

/// The ordered, non-empty chunk list derived from a [`SearchTerm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSequence {
    chunks: Vec<String>,
}

impl ChunkSequence {
    pub fn new(term: &SearchTerm, width: usize) -> Self {
        let chunks = chunk(term.as_str(), width)
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { chunks }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Never true for a sequence built from a validated term.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.chunks
    }
}

impl<'a> IntoIterator for &'a ChunkSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

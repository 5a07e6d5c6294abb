//! Core types shared by the search pipeline, the store and the HTTP layer.
//!
//! [`Group`] is the candidate entity ranked by a search; [`SearchTerm`] is the
//! validated form of the caller's query string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A named group as stored in the `groups` table.
///
/// The field set is the fixed projection every ranked query returns, and the
/// shape of each object in the `GET /groups` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A group that has not been assigned an id yet (seed files, fixtures).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewGroup {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl NewGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A search term that has passed validation.
///
/// Guaranteed non-empty and at most `max_len` characters long. Length is
/// counted in `char`s, so multi-byte input is measured the way a user would
/// count it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validate `raw` against `max_len`.
    pub fn parse(raw: impl Into<String>, max_len: usize) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyTerm);
        }
        if raw.chars().count() > max_len {
            return Err(ValidationError::TermTooLong { max: max_len });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

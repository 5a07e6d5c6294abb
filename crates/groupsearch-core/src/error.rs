//! Error taxonomy for a search request.
//!
//! [`ValidationError`] is the caller's fault and maps to a 400; every other
//! [`SearchError`] variant is a server-side failure. Nothing here is retried.

use thiserror::Error;

use crate::query::QueryError;

/// The search term (or its absence) was rejected before any query was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Cannot search for the empty string")]
    EmptyTerm,
    #[error("Exceeded max term length of {max}")]
    TermTooLong { max: usize },
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A ranked query could not be rendered. Unreachable from a validated term.
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Connectivity or execution failure in the store.
    #[error("{0}")]
    Store(String),
    /// A returned row could not be mapped to a [`Group`](crate::Group).
    #[error("failed to decode group row: {0}")]
    Decode(String),
    #[error("failed to encode response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SearchError {
    /// `true` when the caller sent a bad request rather than the server failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchError::Validation(_))
    }
}

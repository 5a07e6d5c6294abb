//! Store contract — the one operation the search pipeline needs from storage.
//!
//! Implementations own their connection pool, any retry policy, and the
//! mapping from their row format to [`Group`]. If the returned future is
//! dropped (client disconnect), implementations should abandon the in-flight
//! query.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::query::RankedQuery;
use crate::types::Group;

#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Execute `query` and decode every returned row, preserving row order.
    ///
    /// Execution failures map to [`SearchError::Store`], row decoding failures
    /// to [`SearchError::Decode`].
    async fn fetch_ranked(&self, query: &RankedQuery) -> Result<Vec<Group>, SearchError>;
}

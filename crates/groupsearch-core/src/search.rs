//! Search layer — validate, chunk, build, execute.

use crate::chunker::ChunkSequence;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::query::ranked_query;
use crate::store::GroupStore;
use crate::types::{Group, SearchTerm};

/// Rank the groups in `store` against `raw_term`.
///
/// Validation failures return before any query is built, so a rejected term
/// never reaches the store.
pub async fn search_groups(
    store: &dyn GroupStore,
    config: &SearchConfig,
    raw_term: &str,
) -> Result<Vec<Group>, SearchError> {
    let term = SearchTerm::parse(raw_term, config.max_term_len)?;
    let chunks = ChunkSequence::new(&term, config.chunk_width);
    let query = ranked_query(&chunks, config)?;
    tracing::debug!(term = %term, chunks = ?chunks.as_slice(), "search: query built");

    let groups = store.fetch_ranked(&query).await?;
    tracing::debug!(term = %term, results = groups.len(), "search: executed");
    Ok(groups)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Ranked query builder.
//!
//! A ranked query scores every group by how many `LIKE '%chunk%'` clauses its
//! name satisfies, drops zero scores, and keeps the top N:
//!
//! ```sql
//! SELECT <cols> FROM (
//!     SELECT (CASE WHEN name LIKE ?2 THEN 1 ELSE 0 END + ...) AS num_matches, <cols>
//!     FROM groups
//! ) AS scored
//! WHERE num_matches > 0
//! ORDER BY num_matches DESC
//! LIMIT ?1
//! ```
//!
//! Clauses and parameters are accumulated side by side and the SQL text is
//! rendered once in [`RankedQueryBuilder::build`]. No caller-supplied text is
//! ever interpolated into the SQL; it only appears in [`RankedQuery::params`].

use thiserror::Error;

use crate::chunker::ChunkSequence;
use crate::config::SearchConfig;

/// Table holding the candidates.
pub const GROUPS_TABLE: &str = "groups";

/// Fixed projection returned by every ranked query, in decode order.
pub const GROUP_COLUMNS: &[&str] = &["id", "name", "description", "created_at"];

/// Column the chunks are matched against.
pub const NAME_COLUMN: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("ranked query needs at least one match clause")]
    NoMatchClauses,
}

/// A bound query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Integer(i64),
    Text(String),
}

/// Rendered SQL plus its positional parameters (`?1` is `params[0]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

impl RankedQuery {
    /// The result cap bound to `?1`.
    pub fn limit(&self) -> Option<i64> {
        match self.params.first() {
            Some(QueryParam::Integer(n)) => Some(*n),
            _ => None,
        }
    }
}

/// One point when `column LIKE ?param` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchClause {
    column: &'static str,
    param: usize,
}

impl MatchClause {
    fn render(&self) -> String {
        format!("CASE WHEN {} LIKE ?{} THEN 1 ELSE 0 END", self.column, self.param)
    }
}

#[derive(Debug, Clone)]
pub struct RankedQueryBuilder {
    clauses: Vec<MatchClause>,
    params: Vec<QueryParam>,
    tie_break: bool,
}

impl RankedQueryBuilder {
    /// Start a query returning at most `limit` rows. The limit is always
    /// parameter `?1`.
    pub fn new(limit: usize) -> Self {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Self {
            clauses: Vec::new(),
            params: vec![QueryParam::Integer(limit)],
            tie_break: false,
        }
    }

    /// Order equal scores by `name`, then `id`.
    pub fn tie_break(mut self, enabled: bool) -> Self {
        self.tie_break = enabled;
        self
    }

    /// Score one point when `column` contains `needle` anywhere.
    pub fn contains(mut self, column: &'static str, needle: &str) -> Self {
        self.params.push(QueryParam::Text(format!("%{needle}%")));
        self.clauses.push(MatchClause {
            column,
            param: self.params.len(),
        });
        self
    }

    pub fn build(self) -> Result<RankedQuery, QueryError> {
        if self.clauses.is_empty() {
            return Err(QueryError::NoMatchClauses);
        }

        let columns = GROUP_COLUMNS.join(", ");
        let score = self
            .clauses
            .iter()
            .map(MatchClause::render)
            .collect::<Vec<_>>()
            .join(" + ");
        let order = if self.tie_break {
            "num_matches DESC, name ASC, id ASC"
        } else {
            "num_matches DESC"
        };

        let sql = format!(
            "SELECT {columns} FROM (SELECT ({score}) AS num_matches, {columns} FROM {GROUPS_TABLE}) AS scored \
             WHERE num_matches > 0 ORDER BY {order} LIMIT ?1"
        );

        Ok(RankedQuery {
            sql,
            params: self.params,
        })
    }
}

/// Build the ranked query for `chunks` under `config`.
pub fn ranked_query(chunks: &ChunkSequence, config: &SearchConfig) -> Result<RankedQuery, QueryError> {
    chunks
        .iter()
        .fold(
            RankedQueryBuilder::new(config.max_results).tie_break(config.deterministic_ties),
            |builder, chunk| builder.contains(NAME_COLUMN, chunk),
        )
        .build()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

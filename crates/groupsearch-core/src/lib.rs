//! groupsearch-core — ranked group-name search.
//!
//! This crate owns everything between an inbound search term and the
//! parameterized query handed to the store, plus the shared types and the
//! store contract.
//!
//! # Pipeline
//!
//! ```text
//! term ──► SearchTerm ──► ChunkSequence ──► RankedQuery ──► GroupStore ──► Vec<Group>
//!         (validate)      (chunker)         (query)         (store crate)
//! ```
//!
//! Every stage is a pure function of its input and the [`SearchConfig`]; the
//! store's connection pool is the only shared resource and lives outside this
//! crate.

pub mod chunker;
pub mod config;
pub mod error;
pub mod query;
pub mod search;
pub mod store;
pub mod types;

pub use chunker::{chunk, ChunkSequence};
pub use config::{Config, SearchConfig};
pub use error::{SearchError, ValidationError};
pub use query::{QueryError, QueryParam, RankedQuery, RankedQueryBuilder};
pub use search::search_groups;
pub use store::GroupStore;
pub use types::{Group, NewGroup, SearchTerm};

use groupsearch_core::SearchError;
use r2d2_sqlite::rusqlite;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// A row came back but could not be mapped to a group.
    #[error("{0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for SearchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode(msg) => SearchError::Decode(msg),
            other => SearchError::Store(other.to_string()),
        }
    }
}

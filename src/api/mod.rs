//! HTTP surface: a single `GET /groups?term=` route.

pub mod errors;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use groupsearch_core::{GroupStore, SearchConfig};
use std::sync::Arc;

pub use errors::ApiError;

/// Shared state handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GroupStore>,
    pub search: Arc<SearchConfig>,
}

impl AppState {
    /// Fails if `search` holds values the chunker cannot work with, so a
    /// config built in code gets the same checks as [`Config::load`].
    ///
    /// [`Config::load`]: groupsearch_core::Config::load
    pub fn new(store: Arc<dyn GroupStore>, search: SearchConfig) -> anyhow::Result<Self> {
        search.validate()?;
        Ok(Self {
            store,
            search: Arc::new(search),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/groups", get(handlers::search_groups))
        .with_state(state)
}

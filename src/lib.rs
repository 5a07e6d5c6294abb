//! groupsearch — ranked group-name search over HTTP.
//!
//! This crate wires the search pipeline from `groupsearch-core` to an axum
//! router and the SQLite store from `groupsearch-store`. The router and
//! [`serve`] are public so that integration tests can drive the service
//! without a real socket.
//!
//! # Architecture
//!
//! ```text
//! GET /groups?term= ──► api ──► search_groups ──► GroupStore (SQLite pool)
//!                        │
//!                        └──► JSON / plain-text error response
//! ```

pub mod api;

use anyhow::Context;
use groupsearch_core::{Config, GroupStore, NewGroup};
use std::path::Path;
use std::sync::Arc;

/// Bind `config.server.bind` and serve until Ctrl-C.
pub async fn serve(config: &Config, store: Arc<dyn GroupStore>) -> anyhow::Result<()> {
    let state = api::AppState::new(store, config.search.clone())?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "groupsearch listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("groupsearch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Read a JSON array of groups to insert before serving.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<NewGroup>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not a JSON array of groups", path.display()))
}

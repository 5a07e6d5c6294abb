//! Request handlers.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use groupsearch_core::{SearchError, ValidationError};
use serde::Deserialize;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
}

/// `GET /groups?term=<term>` — groups ranked by how many chunks of `term`
/// their name contains, best first.
///
/// Returns 400 for a missing, empty or over-long term and 500 with the
/// underlying message for anything that fails after validation.
pub async fn search_groups(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let term = params.term.ok_or(ValidationError::MissingParameter("term"))?;

    let groups = groupsearch_core::search_groups(state.store.as_ref(), &state.search, &term)
        .await
        .map_err(|err| {
            if err.is_client_error() {
                tracing::debug!(term = %term, error = %err, "search rejected");
            }
            err
        })?;

    let body = serde_json::to_vec(&groups).map_err(SearchError::from)?;
    tracing::info!(term = %term, results = groups.len(), "search served");

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

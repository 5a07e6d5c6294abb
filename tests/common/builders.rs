//! Test builders — stores, routers and one-shot requests.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use groupsearch::api::{create_router, AppState};
use groupsearch_core::{Group, NewGroup, SearchConfig};
use groupsearch_store::SqliteGroupStore;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Stores and routers
// ---------------------------------------------------------------------------

/// In-memory store holding one group per name, inserted in order.
pub fn store_with(names: &[&str]) -> SqliteGroupStore {
    let store = SqliteGroupStore::open_in_memory().unwrap();
    let groups: Vec<NewGroup> = names.iter().map(|n| NewGroup::new(*n)).collect();
    store.insert_many(&groups).unwrap();
    store
}

/// Router over `store` with the given search settings.
pub fn app(store: SqliteGroupStore, search: SearchConfig) -> Router {
    create_router(AppState::new(Arc::new(store), search).unwrap())
}

/// Router over an in-memory store of `names` with default settings.
pub fn app_with(names: &[&str]) -> Router {
    app(store_with(names), SearchConfig::default())
}

/// Default settings with score ties broken by name, for exact-order assertions.
pub fn deterministic() -> SearchConfig {
    SearchConfig {
        deterministic_ties: true,
        ..SearchConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn groups(&self) -> Vec<Group> {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not a group array ({e}): {}", self.body))
    }

    pub fn names(&self) -> Vec<String> {
        self.groups().into_iter().map(|g| g.name).collect()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri).await
}

/// `GET /groups?term=<term>`. `term` must already be URL-safe.
pub async fn search(app: &Router, term: &str) -> TestResponse {
    get(app, &format!("/groups?term={term}")).await
}

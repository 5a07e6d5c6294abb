//! API error type mapped to HTTP status codes.
//!
//! Bodies are plain text: the validation message for a 400, the underlying
//! error message for a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use groupsearch_core::{SearchError, ValidationError};

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid or missing search term (400).
    BadRequest(String),
    /// Store, decoding or encoding failure (500).
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        if err.is_client_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, message).into_response()
    }
}

//! Server state and response conversions.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error_handling::{ErrorKind, ExtractError};
use crate::fetch::MetadataFetcher;
use crate::models::ErrorResponse;

/// Shared state for the extraction server
#[derive(Clone)]
pub struct AppState {
    /// Fetch strategy selected at startup; immutable, shared by all requests
    pub fetcher: Arc<dyn MetadataFetcher>,
}

impl AppState {
    /// Wraps the startup-selected strategy
    pub fn new(fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self { fetcher }
    }
}

/// HTTP status for an extraction failure.
///
/// Only unexpected failures are server errors; validation, not-found and
/// upstream-shape failures are all reported as bad requests.
pub fn status_for(error: &ExtractError) -> StatusCode {
    match error.kind() {
        ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::UpstreamProtocol => {
            StatusCode::BAD_REQUEST
        }
    }
}

/// Builds a `{"error": ...}` response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        error_response(status_for(&self), self.response_message())
    }
}

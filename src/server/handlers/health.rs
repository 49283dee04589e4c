//! Health check handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_NAME;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Liveness endpoint; never touches upstream
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
        }),
    )
        .into_response()
}

//! Video extraction handler.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info, warn};
use serde_json::Value;

use super::super::types::{status_for, AppState};
use crate::error_handling::ExtractError;
use crate::fetch::extract_video;
use crate::models::ExtractResponse;

/// Reads the `url` string out of a raw request body.
///
/// A missing or non-JSON body, a non-object payload, a missing key and a
/// non-string value are all reported as `UrlRequired`.
fn url_from_body(body: &[u8]) -> Result<String, ExtractError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| ExtractError::UrlRequired)?;
    payload
        .get("url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ExtractError::UrlRequired)
}

/// `POST /extract_tiktok`
///
/// The body is taken as raw bytes so that every malformed body maps to the
/// same JSON error instead of an extractor rejection.
pub async fn extract_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let url = match url_from_body(&body) {
        Ok(url) => url,
        Err(e) => {
            warn!("Rejected extraction request: {}", e);
            return e.into_response();
        }
    };

    let started = Instant::now();
    info!("Extracting {} (strategy: {})", url, state.fetcher.name());

    match extract_video(state.fetcher.as_ref(), &url).await {
        Ok(record) => {
            info!(
                "Extracted video {} in {:.2}s",
                record.id,
                started.elapsed().as_secs_f64()
            );
            (StatusCode::OK, Json(ExtractResponse::new(record))).into_response()
        }
        Err(e) => {
            if status_for(&e).is_server_error() {
                error!("Error extracting {}: {}", url, e);
            } else {
                warn!("Failed to extract {}: {}", url, e);
            }
            e.into_response()
        }
    }
}

//! Static API documentation.

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::super::types::error_response;
use crate::config::{SERVICE_NAME, SERVICE_VERSION};

/// Describes the service endpoints and the shape of a successful extraction
pub async fn docs_handler() -> Response {
    let docs = json!({
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "endpoints": {
            "/extract_tiktok": {
                "method": "POST",
                "description": "Extract TikTok video information",
                "body": {
                    "url": "TikTok video URL"
                },
                "response": {
                    "success": "boolean",
                    "data": {
                        "id": "video ID",
                        "title": "video title/description",
                        "desc": "video description",
                        "create_time": "creation time (unix seconds)",
                        "author": "author information",
                        "video": "video URLs and metadata",
                        "music": "music information",
                        "stats": "video statistics",
                        "hashtags": "extracted hashtags",
                        "play": "direct video URL for download"
                    }
                }
            },
            "/health": {
                "method": "GET",
                "description": "Health check endpoint"
            }
        }
    });

    (StatusCode::OK, Json(docs)).into_response()
}

/// JSON 404 for unknown paths
pub async fn not_found_handler(uri: Uri) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("Not found: {}", uri.path()))
}

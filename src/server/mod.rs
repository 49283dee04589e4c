//! HTTP extraction server.
//!
//! Provides three endpoints:
//! - `POST /extract_tiktok` - resolve a video URL and return its normalized record
//! - `GET /health` - liveness check
//! - `GET /` - JSON documentation of the above
//!
//! Every failure, including a panic inside a handler, is answered with a
//! `{"error": ...}` JSON body.

mod handlers;
mod types;

use std::any::Any;
use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::fetch::MetadataFetcher;
use handlers::{docs_handler, extract_handler, health_handler, not_found_handler};
pub use types::{status_for, AppState};

/// Turns a handler panic into a `Server error` JSON response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    log::error!("Handler panicked: {}", detail);
    types::error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Server error: {}", detail),
    )
}

/// Builds the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(docs_handler))
        .route("/health", get(health_handler))
        .route("/extract_tiktok", post(extract_handler))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, finishing in-flight requests");
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_server(
    config: &Config,
    fetcher: Arc<dyn MetadataFetcher>,
) -> Result<(), anyhow::Error> {
    let address = config.bind_address();
    let strategy = fetcher.name();
    let app = build_router(AppState::new(fetcher));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind server to {}", address))?;

    log::info!("Server listening on http://{}/", address);
    log::info!("  - Extract: POST http://{}/extract_tiktok", address);
    log::info!("  - Health: GET http://{}/health", address);
    log::info!("  - Fetch strategy: {}", strategy);
    if config.debug {
        log::debug!("Debug mode enabled");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

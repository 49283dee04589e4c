// Shared test helpers for driving the router without a socket.
//
// Provides a stub fetch strategy and small request/response utilities used by
// the integration test files.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use tiktok_extractor::{build_router, AppState, ExtractError, FetchTarget, MetadataFetcher, RawMetadata};

/// Fetch strategy whose answer is fixed by the test.
pub struct StubFetcher {
    respond: fn(&FetchTarget) -> Result<RawMetadata, ExtractError>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new(respond: fn(&FetchTarget) -> Result<RawMetadata, ExtractError>) -> Arc<Self> {
        Arc::new(Self {
            respond,
            calls: AtomicUsize::new(0),
        })
    }

    #[allow(dead_code)] // Not every test file counts calls
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataFetcher for StubFetcher {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn fetch(&self, target: &FetchTarget) -> Result<RawMetadata, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)(target)
    }
}

/// Router backed by the given fetcher.
pub fn router_with(fetcher: Arc<dyn MetadataFetcher>) -> Router {
    build_router(AppState::new(fetcher))
}

/// Sends one request and returns the status and the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, body)
}

/// `POST /extract_tiktok` with a raw body.
pub fn extract_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/extract_tiktok")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// `GET` request for `path`.
#[allow(dead_code)] // Not every test file issues GETs
pub fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("valid request")
}

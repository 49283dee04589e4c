//! End-to-end tests of the HTTP surface.
//!
//! Requests are driven straight through the router with `oneshot`, so no port
//! is bound. Upstream is either a stub strategy or a local `httptest` server.

mod helpers;

use axum::http::StatusCode;
use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use helpers::{extract_request, get_request, router_with, send, StubFetcher};
use tiktok_extractor::{build_fetcher, Config, ExtractError, FetchStrategy, FetchTarget, RawMetadata};

fn found(target: &FetchTarget) -> Result<RawMetadata, ExtractError> {
    Ok(json!({
        "id": target.video_id,
        "desc": "weekend #travel #food",
        "createTime": 1700000000,
        "author": { "uniqueId": "someuser", "nickname": "Some User" },
        "video": { "playAddr": "https://cdn.example/play.mp4", "width": 576 },
        "stats": { "playCount": 1500, "diggCount": "42" }
    }))
}

fn not_found(_: &FetchTarget) -> Result<RawMetadata, ExtractError> {
    Err(ExtractError::NotFound)
}

fn page_failure(_: &FetchTarget) -> Result<RawMetadata, ExtractError> {
    Err(ExtractError::PageFetchFailed(403))
}

fn internal(_: &FetchTarget) -> Result<RawMetadata, ExtractError> {
    Err(ExtractError::Internal("state corrupted".to_string()))
}

fn panics(_: &FetchTarget) -> Result<RawMetadata, ExtractError> {
    panic!("strategy exploded")
}

#[tokio::test]
async fn test_extract_success_returns_record() {
    let fetcher = StubFetcher::new(found);
    let app = router_with(fetcher.clone());

    let (status, body) = send(
        app,
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/7123456789"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["id"], "7123456789");
    assert_eq!(data["create_time"], 1700000000);
    assert_eq!(data["author"]["unique_id"], "someuser");
    assert_eq!(data["author"]["avatar"], "");
    assert_eq!(data["video"]["width"], 576);
    assert_eq!(data["video"]["height"], 0);
    assert_eq!(data["stats"]["play_count"], 1500);
    assert_eq!(data["stats"]["digg_count"], 42);
    assert_eq!(data["hashtags"], "#travel #food");
    assert_eq!(data["play"], "https://cdn.example/play.mp4");
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_extract_missing_url_is_bad_request() {
    let fetcher = StubFetcher::new(found);

    for body in ["{}", "", "not json", r#"{"url": 42}"#, r#"["url"]"#] {
        let (status, payload) = send(router_with(fetcher.clone()), extract_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
        assert_eq!(payload, json!({ "error": "URL is required" }), "body {:?}", body);
    }
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_extract_foreign_domain_is_bad_request() {
    let fetcher = StubFetcher::new(found);
    let (status, body) = send(
        router_with(fetcher.clone()),
        extract_request(r#"{"url": "https://example.com/not-tiktok"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid TikTok URL" }));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_extract_url_without_id_is_bad_request() {
    let fetcher = StubFetcher::new(found);
    let (status, body) = send(
        router_with(fetcher.clone()),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid TikTok URL");
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_extract_not_found_has_no_success_key() {
    let (status, body) = send(
        router_with(StubFetcher::new(not_found)),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Video not found or private" }));
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn test_extract_page_failure_is_bad_request() {
    let (status, body) = send(
        router_with(StubFetcher::new(page_failure)),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Failed to fetch page: HTTP 403");
}

#[tokio::test]
async fn test_extract_internal_failure_is_server_error() {
    let (status, body) = send(
        router_with(StubFetcher::new(internal)),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server error: state corrupted");
}

#[tokio::test]
async fn test_extract_panic_is_server_error() {
    let (status, body) = send(
        router_with(StubFetcher::new(panics)),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error string");
    assert!(message.starts_with("Server error:"), "got {}", message);
    assert!(message.contains("strategy exploded"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(router_with(StubFetcher::new(found)), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "healthy", "service": "TikTok API Extractor" })
    );
}

#[tokio::test]
async fn test_docs_lists_endpoints() {
    let (status, body) = send(router_with(StubFetcher::new(found)), get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "TikTok API Extractor");
    let endpoints = body["endpoints"].to_string();
    assert!(endpoints.contains("/extract_tiktok"));
    assert!(endpoints.contains("/health"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = send(router_with(StubFetcher::new(found)), get_request("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_on_extract_is_rejected() {
    let app = router_with(StubFetcher::new(found));
    let response = tower::ServiceExt::oneshot(app, get_request("/extract_tiktok"))
        .await
        .expect("router is infallible");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_api_strategy_against_local_upstream() {
    let upstream = Server::run();
    upstream.expect(
        Expectation::matching(request::method_path("GET", "/api/item/detail/")).respond_with(
            json_encoded(json!({
                "statusCode": 0,
                "itemInfo": { "itemStruct": {
                    "id": "7300000000000000001",
                    "desc": "hello #world",
                    "music": { "id": 99, "title": "original sound" },
                    "video": { "downloadAddr": "https://cdn.example/dl.mp4", "playAddr": "https://cdn.example/p.mp4" }
                }}
            })),
        ),
    );

    let config = Config {
        strategy: FetchStrategy::Api,
        api_base: upstream.url("/").to_string(),
        ..Default::default()
    };
    let (status, body) = send(
        router_with(build_fetcher(&config)),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/7300000000000000001"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "7300000000000000001");
    assert_eq!(body["data"]["music"]["id"], "99");
    assert_eq!(body["data"]["hashtags"], "#world");
    assert_eq!(body["data"]["play"], "https://cdn.example/dl.mp4");
}

#[tokio::test]
async fn test_api_strategy_unknown_video_is_bad_request() {
    let upstream = Server::run();
    upstream.expect(
        Expectation::matching(request::method_path("GET", "/api/item/detail/"))
            .respond_with(json_encoded(json!({ "statusCode": 10204 }))),
    );

    let config = Config {
        api_base: upstream.url("/").to_string(),
        ..Default::default()
    };
    let (status, body) = send(
        router_with(build_fetcher(&config)),
        extract_request(r#"{"url": "https://www.tiktok.com/@someuser/video/1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Video not found or private");
}

//! Item-detail lookup by video ID.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::request::RequestHeaders;
use super::{is_video_record, FetchSettings, FetchTarget, MetadataFetcher};
use crate::config::{API_VIDEO_PATH, ITEM_DETAIL_PATH, MAX_LOG_PREVIEW_CHARS};
use crate::error_handling::{describe_reqwest_error, ExtractError};
use crate::initialization::init_api_client;
use crate::models::RawMetadata;
use crate::normalize::value_at;

/// Builds the item-detail URL for a video ID.
///
/// Any path on `api_base` is kept as a prefix, with or without a trailing
/// slash.
fn item_detail_url(api_base: &str, video_id: &str) -> Result<url::Url, ExtractError> {
    let mut url = url::Url::parse(api_base)
        .and_then(|mut base| {
            if !base.path().ends_with('/') {
                let prefixed = format!("{}/", base.path());
                base.set_path(&prefixed);
            }
            base.join(ITEM_DETAIL_PATH)
        })
        .map_err(|e| ExtractError::Internal(format!("invalid API base {}: {}", api_base, e)))?;
    url.query_pairs_mut().append_pair("itemId", video_id);
    Ok(url)
}

/// Requests one video's item detail through `client`.
///
/// Shared by the ID and session strategies. Transport failures, non-2xx
/// answers and non-JSON bodies are generic fetch failures; a non-zero upstream
/// `statusCode` or an empty record means the video does not exist.
pub(crate) async fn lookup_item(
    client: &Client,
    api_base: &str,
    video_id: &str,
) -> Result<RawMetadata, ExtractError> {
    let url = item_detail_url(api_base, video_id)?;
    debug!("Requesting item detail: {}", url);

    let response = RequestHeaders::apply_api_headers(client.get(url))
        .send()
        .await
        .map_err(|e| {
            ExtractError::FetchFailed(format!(
                "item detail request failed ({}): {}",
                describe_reqwest_error(&e),
                e
            ))
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::FetchFailed(format!(
            "item detail returned HTTP {}",
            status.as_u16()
        )));
    }

    let body = response.text().await.map_err(|e| {
        ExtractError::FetchFailed(format!(
            "item detail body unreadable ({}): {}",
            describe_reqwest_error(&e),
            e
        ))
    })?;
    let payload: Value = serde_json::from_str(&body).map_err(|e| {
        debug!(
            "Item detail body is not JSON: {}",
            body.chars().take(MAX_LOG_PREVIEW_CHARS).collect::<String>()
        );
        ExtractError::FetchFailed(format!("invalid item detail response: {}", e))
    })?;

    let status_code = payload
        .get("statusCode")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    if status_code != 0 {
        debug!("Item detail for {} reported statusCode {}", video_id, status_code);
        return Err(ExtractError::NotFound);
    }

    match value_at(&payload, API_VIDEO_PATH) {
        Some(item) if is_video_record(item) => Ok(item.clone()),
        _ => Err(ExtractError::NotFound),
    }
}

/// Looks videos up by ID, with a fresh client for every call.
pub struct ItemApiFetcher {
    settings: FetchSettings,
}

impl ItemApiFetcher {
    /// Creates the strategy from shared upstream settings.
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl MetadataFetcher for ItemApiFetcher {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn fetch(&self, target: &FetchTarget) -> Result<RawMetadata, ExtractError> {
        let client = init_api_client(&self.settings.user_agent)
            .map_err(|e| ExtractError::Internal(format!("HTTP client initialization error: {}", e)))?;
        lookup_item(&client, &self.settings.api_base, &target.video_id).await
    }
}

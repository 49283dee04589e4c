//! Page fetch plus embedded state blob extraction.
//!
//! The rendered video page inlines its initial application state as JSON
//! assigned to a global variable. The variable name and the key path down to
//! the video record are undocumented and change without notice, so this
//! strategy is best-effort.

use std::sync::LazyLock;

use async_trait::async_trait;
use log::{debug, warn};
use regex::Regex;
use reqwest::StatusCode;

use super::request::RequestHeaders;
use super::{is_video_record, FetchSettings, FetchTarget, MetadataFetcher};
use crate::config::{EMBEDDED_STATE_VARIABLE, EMBEDDED_VIDEO_PATH, MAX_LOG_PREVIEW_CHARS};
use crate::error_handling::ExtractError;
use crate::initialization::init_page_client;
use crate::models::RawMetadata;
use crate::normalize::value_at;
use crate::utils::compile_regex_unsafe;

/// `window.<VAR> = {...};`
static PRIMARY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        &format!(
            r"(?s)window\.{}\s*=\s*(\{{.*?\}});",
            regex::escape(EMBEDDED_STATE_VARIABLE)
        ),
        "PRIMARY_STATE_RE",
    )
});

/// `<VAR>` followed by the first `{...}` that closes right before `</script>`.
///
/// Also covers `<script id="<VAR>" type="application/json">{...}</script>`.
static FALLBACK_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        &format!(
            r"(?s){}.*?(\{{.*?\}})\s*</script>",
            regex::escape(EMBEDDED_STATE_VARIABLE)
        ),
        "FALLBACK_STATE_RE",
    )
});

/// Finds the embedded state JSON text, primary pattern first.
fn find_state_blob(html: &str) -> Option<&str> {
    [&*PRIMARY_STATE_RE, &*FALLBACK_STATE_RE]
        .into_iter()
        .find_map(|re| re.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the video record from a rendered video page.
///
/// # Errors
///
/// - `ExtractionFailed` if no state assignment is found
/// - `DecodeFailed` if the blob is not valid JSON
/// - `VideoDataNotFound` if the blob has no (or an empty) video section
pub fn extract_embedded_state(html: &str) -> Result<RawMetadata, ExtractError> {
    let blob = find_state_blob(html).ok_or(ExtractError::ExtractionFailed)?;

    let state: serde_json::Value = serde_json::from_str(blob).map_err(|e| {
        debug!(
            "Embedded state is not JSON: {}",
            blob.chars().take(MAX_LOG_PREVIEW_CHARS).collect::<String>()
        );
        ExtractError::DecodeFailed(e)
    })?;

    match value_at(&state, EMBEDDED_VIDEO_PATH) {
        Some(item) if is_video_record(item) => Ok(item.clone()),
        _ => Err(ExtractError::VideoDataNotFound),
    }
}

/// Fetches the video page and reads the embedded state blob.
pub struct PageScrapeFetcher {
    settings: FetchSettings,
}

impl PageScrapeFetcher {
    /// Creates the strategy from shared upstream settings.
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl MetadataFetcher for PageScrapeFetcher {
    fn name(&self) -> &'static str {
        "scrape"
    }

    async fn fetch(&self, target: &FetchTarget) -> Result<RawMetadata, ExtractError> {
        let client = init_page_client(&self.settings.user_agent, self.settings.page_timeout)
            .map_err(|e| {
                ExtractError::Internal(format!("HTTP client initialization error: {}", e))
            })?;

        debug!(
            "Fetching page {} with headers {:?}",
            target.url,
            RequestHeaders::as_vec()
        );
        let response = RequestHeaders::apply_to_request_builder(client.get(&target.url))
            .send()
            .await
            .map_err(|e| ExtractError::network("Failed to fetch page", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Page {} answered HTTP {}", target.url, status.as_u16());
            return Err(ExtractError::PageFetchFailed(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractError::network("Failed to read page body", e))?;
        debug!("Fetched {} bytes from {}", html.len(), target.url);

        extract_embedded_state(&html)
    }
}

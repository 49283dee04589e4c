//! Video metadata fetching.
//!
//! A fetch strategy turns a resolved video URL into raw upstream metadata.
//! Three interchangeable strategies implement [`MetadataFetcher`]:
//! - [`ItemApiFetcher`]: item-detail lookup by video ID, fresh client per call
//! - [`SessionFetcher`]: item-detail lookup by URL inside a scoped upstream session
//! - [`PageScrapeFetcher`]: page fetch plus embedded state blob extraction
//!
//! The strategy is picked once from configuration ([`build_fetcher`]); all of
//! them share the same success shape and the same error messages.

mod api;
mod request;
mod scrape;
mod session;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::config::{Config, FetchStrategy};
use crate::error_handling::ExtractError;
use crate::models::{RawMetadata, VideoRecord};
use crate::normalize::map_video_record;
use crate::resolver::{extract_video_id, is_tiktok_url};

pub use api::ItemApiFetcher;
pub use scrape::{extract_embedded_state, PageScrapeFetcher};
pub use session::SessionFetcher;

/// A video to fetch: the URL as submitted plus the ID resolved from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    /// URL exactly as submitted
    pub url: String,
    /// ID resolved from `url`; may be a short-link token
    pub video_id: String,
}

/// Upstream settings shared by all strategies.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// User-Agent presented upstream
    pub user_agent: String,
    /// Base URL of the item-detail API
    pub api_base: String,
    /// Bound on the page fetch of the scrape strategy
    pub page_timeout: Duration,
}

impl From<&Config> for FetchSettings {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            api_base: config.api_base.clone(),
            page_timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Source of raw video metadata.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Strategy name used in logs.
    fn name(&self) -> &'static str;

    /// Fetches the raw metadata record for one video.
    ///
    /// # Errors
    ///
    /// `NotFound`/`VideoDataNotFound` when upstream has no record, an
    /// upstream-protocol variant when upstream answers in an unexpected shape,
    /// `Network`/`Internal` for anything else.
    async fn fetch(&self, target: &FetchTarget) -> Result<RawMetadata, ExtractError>;
}

/// Builds the fetch strategy selected in the configuration.
pub fn build_fetcher(config: &Config) -> Arc<dyn MetadataFetcher> {
    let settings = FetchSettings::from(config);
    match config.strategy {
        FetchStrategy::Api => Arc::new(ItemApiFetcher::new(settings)),
        FetchStrategy::Session => Arc::new(SessionFetcher::new(settings)),
        FetchStrategy::Scrape => Arc::new(PageScrapeFetcher::new(settings)),
    }
}

/// Resolves, fetches and normalizes one video.
///
/// # Errors
///
/// `InvalidUrl` when the URL is not on the platform domain or carries no
/// recognizable video ID; otherwise whatever the fetcher reports.
pub async fn extract_video(
    fetcher: &dyn MetadataFetcher,
    url: &str,
) -> Result<VideoRecord, ExtractError> {
    if !is_tiktok_url(url) {
        return Err(ExtractError::InvalidUrl);
    }
    let video_id = extract_video_id(url).ok_or(ExtractError::InvalidUrl)?;
    debug!(
        "Resolved video ID {} from {} (strategy: {})",
        video_id,
        url,
        fetcher.name()
    );

    let target = FetchTarget {
        url: url.to_string(),
        video_id,
    };
    let raw = fetcher.fetch(&target).await?;
    Ok(map_video_record(&raw))
}

/// True if an upstream section can be mapped into a video record.
///
/// Only a non-empty JSON object qualifies; scalars, arrays and `null` would
/// map to an all-default record.
pub(crate) fn is_video_record(value: &Value) -> bool {
    matches!(value, Value::Object(map) if !map.is_empty())
}

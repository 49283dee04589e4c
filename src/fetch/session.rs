//! Item-detail lookup by URL inside a scoped upstream session.
//!
//! A session is a cookie-carrying client that first opens the video page
//! (following short-link redirects) and then performs the item-detail lookup.
//! [`UpstreamSession`] owns that client; dropping it releases the session, so
//! every exit path of a fetch (success, `?` error, panic, cancelled future)
//! closes it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::api::lookup_item;
use super::request::RequestHeaders;
use super::{FetchSettings, FetchTarget, MetadataFetcher};
use crate::error_handling::{describe_reqwest_error, ExtractError};
use crate::initialization::init_session_client;
use crate::models::RawMetadata;
use crate::resolver::extract_video_id;

/// An open upstream session, released on drop.
pub(crate) struct UpstreamSession {
    client: Client,
    opened_at: Instant,
    active: Arc<AtomicUsize>,
}

impl UpstreamSession {
    /// Opens a session for one call and records it in `active`.
    fn acquire(settings: &FetchSettings, active: &Arc<AtomicUsize>) -> Result<Self, ExtractError> {
        let client = init_session_client(&settings.user_agent).map_err(|e| {
            ExtractError::Internal(format!("HTTP client initialization error: {}", e))
        })?;
        active.fetch_add(1, Ordering::SeqCst);
        debug!("Opened upstream session");
        Ok(Self {
            client,
            opened_at: Instant::now(),
            active: Arc::clone(active),
        })
    }

    /// Visits the video URL and returns the final URL after redirects.
    ///
    /// Collects the session cookies as a side effect.
    async fn visit(&self, url: &str) -> Result<String, ExtractError> {
        let response = RequestHeaders::apply_to_request_builder(self.client.get(url))
            .send()
            .await
            .map_err(|e| {
                ExtractError::FetchFailed(format!(
                    "session page request failed ({}): {}",
                    describe_reqwest_error(&e),
                    e
                ))
            })?;
        if !response.status().is_success() {
            debug!(
                "Session page {} answered HTTP {}",
                url,
                response.status().as_u16()
            );
        }
        Ok(response.url().to_string())
    }
}

impl Drop for UpstreamSession {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        debug!(
            "Closed upstream session after {:.2}s",
            self.opened_at.elapsed().as_secs_f64()
        );
    }
}

/// Looks videos up by URL, one scoped session per call.
pub struct SessionFetcher {
    settings: FetchSettings,
    active: Arc<AtomicUsize>,
}

impl SessionFetcher {
    /// Creates the strategy with no sessions open.
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            settings,
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of sessions currently open.
    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataFetcher for SessionFetcher {
    fn name(&self) -> &'static str {
        "session"
    }

    async fn fetch(&self, target: &FetchTarget) -> Result<RawMetadata, ExtractError> {
        let session = UpstreamSession::acquire(&self.settings, &self.active)?;

        let final_url = session.visit(&target.url).await?;
        // Short links only reveal the numeric ID after redirects
        let video_id = extract_video_id(&final_url)
            .filter(|id| id.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or_else(|| target.video_id.clone());
        if video_id != target.video_id {
            debug!("{} redirected to video {}", target.url, video_id);
        }

        lookup_item(&session.client, &self.settings.api_base, &video_id).await
    }
}

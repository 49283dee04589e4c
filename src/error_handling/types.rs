//! Error type definitions.
//!
//! This module defines the errors raised while starting the service and while
//! extracting a single video.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Broad failure classes a client can act on.
///
/// Only `Unexpected` maps to a server-side status; everything else is reported
/// to the caller as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself is unusable (missing or foreign URL)
    Validation,
    /// Upstream has no record for the video (private, deleted, invalid)
    NotFound,
    /// Upstream answered, but not in the expected shape
    UpstreamProtocol,
    /// Anything else: transport failures, internal faults
    Unexpected,
}

/// Errors produced while turning a URL into a video record.
///
/// The `Display` text of each variant is exactly the message returned to the
/// HTTP client (apart from the `Server error: ` prefix added for
/// [`ErrorKind::Unexpected`]).
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Request body missing or lacking a `url` string.
    #[error("URL is required")]
    UrlRequired,

    /// URL is not on the platform domain, or no video ID could be found in it.
    #[error("Invalid TikTok URL")]
    InvalidUrl,

    /// Upstream returned no record for the video.
    #[error("Video not found or private")]
    NotFound,

    /// The video page answered with a status other than 200.
    #[error("Failed to fetch page: HTTP {0}")]
    PageFetchFailed(u16),

    /// The embedded state blob could not be located in the page.
    #[error("Could not extract data from page")]
    ExtractionFailed,

    /// The embedded state blob is not valid JSON.
    #[error("Failed to parse page data: {0}")]
    DecodeFailed(#[source] serde_json::Error),

    /// The page parsed, but the video section is missing or empty.
    #[error("Video data not found in page")]
    VideoDataNotFound,

    /// A client-strategy lookup failed (transport or protocol).
    #[error("Failed to extract video data: {0}")]
    FetchFailed(String),

    /// Transport failure on the page fetch (connect, timeout, body read).
    #[error("{context}: {source}")]
    Network {
        /// What was being attempted
        context: &'static str,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// Internal fault not caused by the request or by upstream.
    #[error("{0}")]
    Internal(String),
}

impl ExtractError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::UrlRequired | ExtractError::InvalidUrl => ErrorKind::Validation,
            ExtractError::NotFound | ExtractError::VideoDataNotFound => ErrorKind::NotFound,
            ExtractError::PageFetchFailed(_)
            | ExtractError::ExtractionFailed
            | ExtractError::DecodeFailed(_)
            | ExtractError::FetchFailed(_) => ErrorKind::UpstreamProtocol,
            ExtractError::Network { .. } | ExtractError::Internal(_) => ErrorKind::Unexpected,
        }
    }

    /// Message placed in the `error` field of the JSON response.
    pub fn response_message(&self) -> String {
        match self.kind() {
            ErrorKind::Unexpected => format!("Server error: {}", self),
            _ => self.to_string(),
        }
    }

    /// Wraps a transport error from the page fetch.
    pub(crate) fn network(context: &'static str, source: ReqwestError) -> Self {
        ExtractError::Network { context, source }
    }
}

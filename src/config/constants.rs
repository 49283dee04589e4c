//! Configuration constants.
//!
//! This module defines the defaults and fixed upstream names used throughout the
//! service: listening address, fetch timeout, upstream endpoints and the markers
//! used to locate embedded page data.

/// Service name reported by `/health` and `/`.
pub const SERVICE_NAME: &str = "TikTok API Extractor";

/// Version reported by the documentation endpoint.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Upper bound on the outbound page fetch in seconds.
///
/// Applies to the page-scrape strategy only; the client strategies run without
/// a deadline.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Largest accepted `timeout_seconds` value.
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

/// Default User-Agent string for upstream requests.
///
/// Mimics a desktop Chrome browser; the page-scrape strategy is blocked outright
/// when the request looks like a script.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Default base URL of the upstream web API.
pub const DEFAULT_API_BASE: &str = "https://www.tiktok.com";

/// Path of the upstream item-detail endpoint, relative to the API base.
///
/// Joined without a leading slash so a path prefix on the base is kept.
pub const ITEM_DETAIL_PATH: &str = "api/item/detail/";

/// Domain substring every accepted video URL must contain.
pub const PLATFORM_DOMAIN: &str = "tiktok.com";

/// Global state variable the rendered page assigns its embedded data to.
pub const EMBEDDED_STATE_VARIABLE: &str = "__UNIVERSAL_DATA_FOR_REHYDRATION__";

/// Key path from the embedded state root down to the video record.
pub const EMBEDDED_VIDEO_PATH: &[&str] = &[
    "__DEFAULT_SCOPE__",
    "webapp.video-detail",
    "itemInfo",
    "itemStruct",
];

/// Key path from an item-detail API response down to the video record.
pub const API_VIDEO_PATH: &[&str] = &["itemInfo", "itemStruct"];

/// Maximum length of upstream text echoed into log lines.
pub const MAX_LOG_PREVIEW_CHARS: usize = 200;

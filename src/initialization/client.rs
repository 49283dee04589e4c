//! HTTP client initialization.
//!
//! Every fetch builds its own client so no connection, cookie or pool outlives
//! the request that created it. Idle pooling is disabled for the same reason.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Builds the client used for a single page fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from configuration
/// - A hard timeout on the whole request
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_page_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .pool_max_idle_per_host(0)
        .build()
}

/// Builds the client used for one item-detail lookup.
///
/// No timeout is applied; the lookup runs until upstream answers or the
/// connection fails.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_api_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .user_agent(user_agent)
        .pool_max_idle_per_host(0)
        .build()
}

/// Builds the cookie-carrying client behind an upstream session.
///
/// Cookies set while opening the video page are replayed on the item-detail
/// call made through the same session.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_session_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .cookie_store(true)
        .user_agent(user_agent)
        .pool_max_idle_per_host(0)
        .build()
}

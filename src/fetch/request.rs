//! Browser-like request headers.
//!
//! The video page answers plain scripted requests with a stripped-down shell
//! that carries no embedded data, so page and session requests present
//! themselves as a desktop Chrome navigation.

/// Request headers sent with every page request.
///
/// `Accept-Encoding` is left to reqwest so responses are only ever compressed
/// in a format the client can decode.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        vec![
            (
                "accept".to_string(),
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8".to_string(),
            ),
            ("accept-language".to_string(), "en-US,en;q=0.9".to_string()),
            ("referer".to_string(), "https://www.tiktok.com/".to_string()),
            ("sec-fetch-dest".to_string(), "document".to_string()),
            ("sec-fetch-mode".to_string(), "navigate".to_string()),
            ("sec-fetch-site".to_string(), "same-origin".to_string()),
            ("upgrade-insecure-requests".to_string(), "1".to_string()),
        ]
    }

    /// Applies the page request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, "https://www.tiktok.com/")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "same-origin",
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }

    /// Applies the headers the item-detail API expects.
    pub(crate) fn apply_api_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, "https://www.tiktok.com/")
    }
}

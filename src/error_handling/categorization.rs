//! Error categorization.
//!
//! Turns `reqwest` errors into short labels for log lines and client-facing
//! messages.

/// Describes a `reqwest::Error` with a short category label.
///
/// HTTP status errors are described by their status code; transport errors by
/// the phase that failed.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to describe
///
/// # Returns
///
/// A label such as `"timeout"`, `"connection error"` or `"HTTP 503"`.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    if let Some(status) = error.status() {
        return format!("HTTP {}", status.as_u16());
    }

    let label = if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connection error"
    } else if error.is_builder() {
        "request builder error"
    } else if error.is_redirect() {
        "redirect error"
    } else if error.is_body() {
        "body error"
    } else if error.is_decode() {
        "decode error"
    } else if error.is_request() {
        "request error"
    } else {
        "other error"
    };
    label.to_string()
}

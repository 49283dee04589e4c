//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `ExtractError`)
//! - Classification of extraction failures into client-actionable kinds
//! - Human-readable descriptions of HTTP client errors
//!
//! Extraction errors are categorized into:
//! - **Validation**: the request must be corrected by the caller
//! - **NotFound**: upstream has no such video
//! - **UpstreamProtocol**: upstream answered in an unexpected shape
//! - **Unexpected**: transport or internal failures (server error)

mod categorization;
mod types;

// Re-export public API
pub use categorization::describe_reqwest_error;
pub use types::{ErrorKind, ExtractError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ExtractError::UrlRequired.response_message(), "URL is required");
        assert_eq!(
            ExtractError::InvalidUrl.response_message(),
            "Invalid TikTok URL"
        );
        assert_eq!(ExtractError::UrlRequired.kind(), ErrorKind::Validation);
        assert_eq!(ExtractError::InvalidUrl.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            ExtractError::NotFound.response_message(),
            "Video not found or private"
        );
        assert_eq!(
            ExtractError::VideoDataNotFound.response_message(),
            "Video data not found in page"
        );
        assert_eq!(ExtractError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ExtractError::VideoDataNotFound.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_upstream_protocol_messages_are_distinct() {
        let decode_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("must fail");
        let messages = [
            ExtractError::PageFetchFailed(404).response_message(),
            ExtractError::ExtractionFailed.response_message(),
            ExtractError::DecodeFailed(decode_err).response_message(),
            ExtractError::FetchFailed("boom".into()).response_message(),
        ];

        assert_eq!(messages[0], "Failed to fetch page: HTTP 404");
        assert_eq!(messages[1], "Could not extract data from page");
        assert!(messages[2].starts_with("Failed to parse page data: "));
        assert_eq!(messages[3], "Failed to extract video data: boom");

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_internal_error_gets_server_prefix() {
        let err = ExtractError::Internal("worker crashed".into());
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.response_message(), "Server error: worker crashed");
    }
}

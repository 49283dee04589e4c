//! Video URL validation and ID extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::PLATFORM_DOMAIN;
use crate::utils::compile_regex_unsafe;

/// ID extraction rules, in priority order.
///
/// Later rules are looser and would match overlapping substrings of URLs the
/// earlier ones already handle, so the first matching rule wins.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"/@[\w\.-]+/video/(\d+)",
        r"/video/(\d+)",
        r"v/(\d+)",
        r"tiktok\.com/.*?/(\d+)",
        r"vm\.tiktok\.com/(\w+)",
    ]
    .iter()
    .map(|pattern| compile_regex_unsafe(pattern, "VIDEO_ID_PATTERNS"))
    .collect()
});

/// Returns true if the URL mentions the platform domain.
///
/// This is a plain substring check; the URL is not parsed.
pub fn is_tiktok_url(url: &str) -> bool {
    url.contains(PLATFORM_DOMAIN)
}

/// Extracts the video ID from a TikTok URL.
///
/// Tries, in order: profile video path (`/@user/video/<digits>`), bare video
/// path, short `v/<digits>` path, any digits segment after the domain, and the
/// `vm.` short-link token.
///
/// # Returns
///
/// The first capture of the first matching rule, or `None` if no rule matches.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(VIDEO_ID_PATTERNS.len(), 5);
    }

    #[test]
    fn test_profile_video_url() {
        assert_eq!(
            extract_video_id("https://www.tiktok.com/@someuser/video/7123456789012345678"),
            Some("7123456789012345678".to_string())
        );
    }

    #[test]
    fn test_profile_with_dots_and_dashes_and_query() {
        assert_eq!(
            extract_video_id("https://www.tiktok.com/@some.user-name/video/123?is_from_webapp=1"),
            Some("123".to_string())
        );
    }

    #[test]
    fn test_bare_video_path() {
        assert_eq!(
            extract_video_id("https://m.tiktok.com/video/555666777"),
            Some("555666777".to_string())
        );
    }

    #[test]
    fn test_short_v_path() {
        assert_eq!(
            extract_video_id("https://m.tiktok.com/v/6800111222333.html"),
            Some("6800111222333".to_string())
        );
    }

    #[test]
    fn test_domain_with_trailing_digits() {
        assert_eq!(
            extract_video_id("https://www.tiktok.com/embed/v2/7000000000000000001"),
            Some("7000000000000000001".to_string())
        );
    }

    #[test]
    fn test_short_link_token() {
        assert_eq!(
            extract_video_id("https://vm.tiktok.com/ZMabc123/"),
            Some("ZMabc123".to_string())
        );
    }

    #[test]
    fn test_priority_profile_rule_beats_generic_digits() {
        // The generic "digits after the domain" rule would also match "42" here
        assert_eq!(
            extract_video_id("https://www.tiktok.com/tag/42/@user/video/999"),
            Some("999".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_video_id("https://www.tiktok.com/@someuser"), None);
        assert_eq!(extract_video_id("https://vt.tiktok.com/ZSDGDKF3r/"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_is_tiktok_url() {
        assert!(is_tiktok_url("https://www.tiktok.com/@a/video/1"));
        assert!(is_tiktok_url("vm.tiktok.com/abc"));
        assert!(!is_tiktok_url("https://example.com/not-tiktok"));
        assert!(!is_tiktok_url(""));
    }
}

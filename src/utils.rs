//! Shared helpers.

use regex::Regex;

/// Compiles a regex pattern that is fixed at build time.
///
/// # Panics
///
/// Panics if the pattern is invalid. Patterns passed here are constants, so a
/// failure is a programming error caught by the first test that touches them.
pub(crate) fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

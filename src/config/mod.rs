//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, upstream endpoints, embedded-data markers)
//! - CLI/environment option types and validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, FetchStrategy, LogFormat, LogLevel};

//! Application initialization and resource setup.
//!
//! This module provides functions to initialize:
//! - The logger (plain or JSON output)
//! - Per-request HTTP clients for each fetch strategy
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_api_client, init_page_client, init_session_client};
pub use logger::init_logger_with;

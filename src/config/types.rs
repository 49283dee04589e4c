//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for command-line
//! and environment parsing. Every option can also be set through an environment
//! variable so the service can be configured the usual container way (`PORT`,
//! `DEBUG`, ...).

use std::fmt;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_API_BASE, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER_AGENT,
    MAX_FETCH_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How video metadata is obtained from upstream.
///
/// All strategies produce the same record and the same error messages; they
/// differ only in where the raw metadata comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetchStrategy {
    /// Item-detail lookup by video ID with a fresh client per call
    Api,
    /// Item-detail lookup by URL inside a scoped upstream session
    Session,
    /// Fetch the rendered page and read its embedded state blob
    Scrape,
}

impl FetchStrategy {
    /// Name used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStrategy::Api => "api",
            FetchStrategy::Session => "session",
            FetchStrategy::Scrape => "scrape",
        }
    }
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the `DEBUG` flag.
///
/// Only a case-insensitive `true` turns debug mode on; anything else, including
/// `1` or `yes`, leaves it off.
fn parse_debug_flag(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

/// Service configuration.
///
/// Parsed from CLI flags and environment variables by the binary, or built
/// programmatically through `Default` by library users and tests.
///
/// # Examples
///
/// ```no_run
/// use tiktok_extractor::{Config, FetchStrategy};
///
/// let config = Config {
///     port: 8080,
///     strategy: FetchStrategy::Scrape,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tiktok_extractor",
    version,
    about = "Serves normalized TikTok video metadata over HTTP."
)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Debug mode: `true` enables verbose logging
    #[arg(
        long,
        env = "DEBUG",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = parse_debug_flag
    )]
    pub debug: bool,

    /// Metadata fetch strategy: api|session|scrape
    #[arg(long, env = "FETCH_STRATEGY", value_enum, default_value_t = FetchStrategy::Api)]
    pub strategy: FetchStrategy,

    /// Upper bound in seconds on the page fetch of the scrape strategy
    #[arg(long, env = "FETCH_TIMEOUT_SECONDS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value sent upstream
    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Base URL of the upstream web API
    #[arg(long, env = "TIKTOK_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Log level: error|warn|info|debug|trace (defaults to debug in debug mode)
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format: plain|json
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            strategy: FetchStrategy::Api,
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: None,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid configuration for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Log level after applying the debug flag.
    ///
    /// An explicit `log_level` always wins; otherwise debug mode means `Debug`
    /// and normal mode means `Info`.
    pub fn effective_log_level(&self) -> LogLevel {
        match (self.log_level, self.debug) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::Info,
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigValidationError` found, naming the field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.port == 0 {
            return Err(ConfigValidationError::new(
                "port",
                "port must be greater than 0",
            ));
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_FETCH_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!(
                    "timeout_seconds must be greater than 0 and at most {}",
                    MAX_FETCH_TIMEOUT_SECS
                ),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "user_agent must not be empty",
            ));
        }

        match url::Url::parse(&self.api_base) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigValidationError::new(
                    "api_base",
                    format!(
                        "api_base must use http or https, got scheme `{}`",
                        parsed.scheme()
                    ),
                ))
            }
            Err(e) => {
                return Err(ConfigValidationError::new(
                    "api_base",
                    format!("api_base must be an absolute URL: {}", e),
                ))
            }
        }

        Ok(())
    }
}

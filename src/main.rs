//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `tiktok_extractor` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line/environment configuration parsing
//! - Logger initialization
//!
//! All request handling is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use tiktok_extractor::initialization::init_logger_with;
use tiktok_extractor::{build_fetcher, start_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal; variables may come from the environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.effective_log_level().into(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("tiktok_extractor error: {}", e);
        process::exit(2);
    }

    let fetcher = build_fetcher(&config);

    if let Err(e) = start_server(&config, fetcher).await {
        eprintln!("tiktok_extractor error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}

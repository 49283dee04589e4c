//! tiktok_extractor library: TikTok video metadata extraction
//!
//! This library resolves TikTok video URLs to video IDs, fetches the raw video
//! metadata through one of three interchangeable strategies, and normalizes it
//! into a fixed-shape [`VideoRecord`]. The same functionality is exposed as an
//! HTTP service by the binary.
//!
//! # Example
//!
//! ```no_run
//! use tiktok_extractor::{build_fetcher, extract_video, Config, FetchStrategy};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     strategy: FetchStrategy::Scrape,
//!     ..Default::default()
//! };
//! let fetcher = build_fetcher(&config);
//!
//! let record = extract_video(
//!     fetcher.as_ref(),
//!     "https://www.tiktok.com/@someuser/video/7123456789012345678",
//! )
//! .await?;
//! println!("{} by @{}: {}", record.id, record.author.unique_id, record.play);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. URL resolution and normalization are
//! plain synchronous functions.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod normalize;
pub mod resolver;
pub mod server;
mod utils;

// Re-export public API
pub use config::{Config, ConfigValidationError, FetchStrategy, LogFormat, LogLevel};
pub use error_handling::{ErrorKind, ExtractError};
pub use fetch::{build_fetcher, extract_video, FetchTarget, MetadataFetcher};
pub use models::{ExtractResponse, RawMetadata, VideoRecord};
pub use normalize::{extract_hashtags, map_video_record};
pub use resolver::{extract_video_id, is_tiktok_url};
pub use server::{build_router, start_server, AppState};

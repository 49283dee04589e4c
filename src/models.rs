//! Video record types returned by the service.

use serde::Serialize;

/// Raw, unvalidated metadata as returned by upstream.
///
/// Every key may be missing and values may carry unexpected JSON types.
pub type RawMetadata = serde_json::Value;

/// Canonical description of one video.
///
/// Always fully populated: absent upstream strings become `""` and absent
/// numbers become `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    /// Platform video ID
    pub id: String,
    /// Same text as `desc`; the platform has no separate title
    pub title: String,
    /// Video description as written by the author
    pub desc: String,
    /// Upload time in unix seconds
    pub create_time: u64,
    /// Uploading account
    pub author: Author,
    /// Stream URLs and dimensions
    pub video: VideoStreams,
    /// Soundtrack
    pub music: Music,
    /// Engagement counters
    pub stats: Stats,
    /// Space-separated hashtags found in `desc`, in order of appearance
    pub hashtags: String,
    /// Best direct playback URL: `download_addr`, else `play_addr`
    pub play: String,
}

/// Account that posted the video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Handle, without the leading `@`
    pub unique_id: String,
    /// Display name
    pub nickname: String,
    /// Medium-size avatar URL
    pub avatar: String,
}

/// Playback URLs and dimensions of the video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoStreams {
    /// Watermarked playback URL
    pub play_addr: String,
    /// Download URL, often empty
    pub download_addr: String,
    /// Static cover image
    pub cover: String,
    /// Animated cover image
    pub dynamic_cover: String,
    /// Width in pixels
    pub width: u64,
    /// Height in pixels
    pub height: u64,
    /// Duration in seconds
    pub duration: u64,
}

/// Soundtrack used by the video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Music {
    /// Platform music ID
    pub id: String,
    /// Track title
    pub title: String,
    /// Track author name
    pub author: String,
    /// Audio URL
    pub play_url: String,
}

/// Engagement counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Likes
    pub digg_count: u64,
    /// Shares
    pub share_count: u64,
    /// Comments
    pub comment_count: u64,
    /// Plays
    pub play_count: u64,
}

/// Successful `/extract_tiktok` response body.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    /// Always `true`; failures use [`ErrorResponse`]
    pub success: bool,
    /// The extracted record
    pub data: VideoRecord,
}

impl ExtractResponse {
    /// Wraps a record in a successful response.
    pub fn new(data: VideoRecord) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error response body shared by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Client-facing failure message
    pub error: String,
}

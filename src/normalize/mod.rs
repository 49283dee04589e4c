//! Normalization of raw upstream metadata into a `VideoRecord`.
//!
//! Upstream payloads are loosely structured: any key may be missing at any
//! depth, and ids or counters sometimes arrive with the wrong JSON type. Every
//! accessor here falls back to `""` or `0` instead of failing.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::{Author, Music, RawMetadata, Stats, VideoRecord, VideoStreams};
use crate::utils::compile_regex_unsafe;

/// `#` followed by word characters or CJK Unified Ideographs.
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"#[\w\u{4e00}-\u{9fff}]+", "HASHTAG_RE"));

/// Follows `path` through nested objects.
///
/// Returns `None` as soon as a key is missing or an intermediate value is not
/// an object.
pub fn value_at<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(raw, |node, key| node.get(*key))
}

/// String at `path`, or `""`.
///
/// Numbers are rendered as their decimal text (ids are often numeric).
fn string_at(raw: &Value, path: &[&str]) -> String {
    match value_at(raw, path) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Non-negative integer at `path`, or `0`.
///
/// Accepts integers, non-negative floats (truncated) and decimal strings.
fn count_at(raw: &Value, path: &[&str]) -> u64 {
    match value_at(raw, path) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

/// Extracts hashtags from a description.
///
/// Returns every hashtag in order of appearance, duplicates included, joined
/// by single spaces. Empty input yields an empty string.
pub fn extract_hashtags(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    HASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Picks the direct playback URL.
///
/// First non-empty of `download_addr` and `play_addr`, else `""`.
pub fn select_play_url(download_addr: &str, play_addr: &str) -> String {
    [download_addr, play_addr]
        .into_iter()
        .find(|addr| !addr.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Maps raw upstream metadata to the canonical record.
///
/// Never fails: every missing or mistyped field takes its default.
pub fn map_video_record(raw: &RawMetadata) -> VideoRecord {
    let desc = string_at(raw, &["desc"]);

    let video = VideoStreams {
        play_addr: string_at(raw, &["video", "playAddr"]),
        download_addr: string_at(raw, &["video", "downloadAddr"]),
        cover: string_at(raw, &["video", "cover"]),
        dynamic_cover: string_at(raw, &["video", "dynamicCover"]),
        width: count_at(raw, &["video", "width"]),
        height: count_at(raw, &["video", "height"]),
        duration: count_at(raw, &["video", "duration"]),
    };
    let play = select_play_url(&video.download_addr, &video.play_addr);

    VideoRecord {
        id: string_at(raw, &["id"]),
        title: desc.clone(),
        hashtags: extract_hashtags(&desc),
        desc,
        create_time: count_at(raw, &["createTime"]),
        author: Author {
            unique_id: string_at(raw, &["author", "uniqueId"]),
            nickname: string_at(raw, &["author", "nickname"]),
            avatar: string_at(raw, &["author", "avatarMedium"]),
        },
        video,
        music: Music {
            id: string_at(raw, &["music", "id"]),
            title: string_at(raw, &["music", "title"]),
            author: string_at(raw, &["music", "authorName"]),
            play_url: string_at(raw, &["music", "playUrl"]),
        },
        stats: Stats {
            digg_count: count_at(raw, &["stats", "diggCount"]),
            share_count: count_at(raw, &["stats", "shareCount"]),
            comment_count: count_at(raw, &["stats", "commentCount"]),
            play_count: count_at(raw, &["stats", "playCount"]),
        },
        play,
    }
}

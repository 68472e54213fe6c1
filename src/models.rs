use serde::{Deserialize, Serialize};

/// One fetched video, normalized from a YouTube Data API search result.
/// Every field defaults to an empty string when the payload omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub channel_id: String,
    pub channel_title: String,
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub published_at: String, // ISO-8601, or empty
    pub thumbnail: String,
}

/// Orders most-recent-first. Timestamps share a fixed ISO-8601 format, so
/// byte comparison matches chronological order; empty strings sort last.
/// Stable, so runs over identical input stay deterministic.
pub fn sort_by_published_desc(items: &mut [VideoItem]) {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

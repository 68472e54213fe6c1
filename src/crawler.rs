use crate::config::Settings;
use crate::models::VideoItem;
use log::warn;
use reqwest::Client;
use serde_json::Value;

// Documentation: https://developers.google.com/youtube/v3/docs/search
const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Fetches recent videos for single channels from the YouTube Data API.
pub struct Crawler {
    client: Client,
    api_key: String,
    max_results: u32,
    endpoint: String,
}

impl Crawler {
    pub fn new(settings: &Settings, max_results: u32) -> Self {
        Crawler {
            client: Client::new(),
            api_key: settings.api_key.clone(),
            max_results,
            endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }

    /// Points the crawler at a different search endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn search_url(&self, channel_id: &str) -> String {
        format!(
            "{}?key={}&channelId={}&part=snippet,id&order=date&maxResults={}&type=video",
            self.endpoint, self.api_key, channel_id, self.max_results
        )
    }

    /// One page of recent videos for one channel. A non-success status is
    /// logged and yields zero items; transport and body-decode errors
    /// propagate to the caller.
    pub async fn fetch_channel(&self, channel_id: &str) -> anyhow::Result<Vec<VideoItem>> {
        let url = self.search_url(channel_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Failed fetch for {}: {} {}",
                channel_id,
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
            return Ok(Vec::new());
        }

        let payload = response.json::<Value>().await?;
        Ok(extract_items(channel_id, &payload))
    }
}

/// Pulls every item out of a search response body. Total: any missing or
/// oddly-shaped field becomes an empty string, and a body without an `items`
/// array yields an empty vec with no diagnostic, same as a valid empty
/// channel.
pub fn extract_items(channel_id: &str, payload: &Value) -> Vec<VideoItem> {
    let items = match payload["items"].as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };

    items
        .iter()
        .map(|item| {
            let snippet = &item["snippet"];
            VideoItem {
                channel_id: channel_id.to_string(),
                channel_title: snippet["channelTitle"].as_str().unwrap_or("").to_string(),
                video_id: item["id"]["videoId"].as_str().unwrap_or("").to_string(),
                title: snippet["title"].as_str().unwrap_or("").to_string(),
                description: snippet["description"].as_str().unwrap_or("").to_string(),
                published_at: snippet["publishedAt"].as_str().unwrap_or("").to_string(),
                thumbnail: snippet["thumbnails"]["high"]["url"]
                    .as_str()
                    .or_else(|| snippet["thumbnails"]["default"]["url"].as_str())
                    .unwrap_or("")
                    .to_string(),
            }
        })
        .collect()
}

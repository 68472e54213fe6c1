use env_logger::Builder;
use log::LevelFilter;
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;

pub const API_KEY_VAR: &str = "YT_API_KEY";
pub const CONFIG_PATH: &str = "channels.json";
pub const OUTPUT_PATH: &str = "videos.xml";

const DEFAULT_MAX_RESULTS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {} env var", API_KEY_VAR)]
    MissingCredential,
}

/// Process-level settings resolved once at startup, before any file or
/// network I/O.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingCredential)?;
        Ok(Settings { api_key })
    }
}

/// Contents of `channels.json`. Channel identifiers are opaque strings and
/// are not validated beyond JSON shape.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub channels: Vec<String>,
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl FeedConfig {
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        let cfg = serde_json::from_str(&raw)?;
        Ok(cfg)
    }
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

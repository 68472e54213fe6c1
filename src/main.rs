mod config;
mod crawler;
mod models;
mod pipeline;
mod render;

use config::{FeedConfig, Settings, CONFIG_PATH, OUTPUT_PATH};
use crawler::Crawler;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_environment();
    config::init_logger();

    // Credential guard, before any file or network I/O.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let cfg = FeedConfig::load(CONFIG_PATH).await?;
    let crawler = Crawler::new(&settings, cfg.max_results);
    pipeline::run(&crawler, &cfg.channels, Path::new(OUTPUT_PATH)).await?;

    Ok(())
}

use crate::crawler::Crawler;
use crate::models::{sort_by_published_desc, VideoItem};
use crate::render;
use log::info;
use std::path::Path;

/// Full run: one sequential fetch per channel, sort, render, overwrite the
/// output file. Each channel's request completes, body parsing included,
/// before the next one starts. Returns the total item count.
pub async fn run(crawler: &Crawler, channels: &[String], output: &Path) -> anyhow::Result<usize> {
    let mut items: Vec<VideoItem> = Vec::new();

    for channel_id in channels {
        let fetched = crawler.fetch_channel(channel_id).await?;
        items.extend(fetched);
    }

    sort_by_published_desc(&mut items);

    let doc = render::render(&items)?;
    tokio::fs::write(output, &doc).await?;
    info!("{} written with {} items", output.display(), items.len());

    Ok(items.len())
}

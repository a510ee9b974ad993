//! `fedisnap timeline <url>` — scrape a public timeline to a workbook.

use crate::renderer::chromium::ChromiumSession;
use crate::renderer::TimelineSession;
use crate::timeline::{self, enrich::EngagementEnricher, ScrapeOptions};
use crate::workbook;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options for one timeline scrape run.
#[derive(Debug, Clone)]
pub struct TimelineArgs {
    pub url: String,
    pub out: PathBuf,
    pub scrolls: u32,
    pub scroll_delay_secs: u64,
    pub settle_secs: u64,
    pub api_delay_ms: u64,
    pub timeout_secs: u64,
    pub api_base: Option<String>,
    pub headful: bool,
}

/// Run the timeline scrape.
pub async fn run(args: &TimelineArgs) -> Result<()> {
    let api_base = match &args.api_base {
        Some(base) => base.clone(),
        None => timeline::enrich::api_base_from_url(&args.url)?,
    };

    let opts = ScrapeOptions {
        scrolls: args.scrolls,
        scroll_delay: Duration::from_secs(args.scroll_delay_secs),
        settle: Duration::from_secs(args.settle_secs),
    };

    println!("Scraping {} ({} scrolls)", args.url, args.scrolls);

    let mut session: Box<dyn TimelineSession> = Box::new(ChromiumSession::launch(args.headful).await?);
    let scraped = timeline::collect_posts(session.as_mut(), &args.url, &opts).await;
    // Close on every exit path before inspecting the scrape result
    if let Err(e) = session.close().await {
        tracing::warn!("browser close failed: {e:#}");
    }
    let mut posts = scraped?.into_posts();

    let enricher = EngagementEnricher::new(
        api_base,
        Duration::from_secs(args.timeout_secs),
        Duration::from_millis(args.api_delay_ms),
    );
    enricher.enrich_all(&mut posts).await;

    write_posts(&args.out, &posts)
}

/// Write the collected posts as the default sheet of one workbook.
pub fn write_posts(out: &Path, posts: &[timeline::ScrapedPost]) -> Result<()> {
    let table = timeline::posts_table(posts);
    workbook::write_workbook(out, &[("", &table)])?;

    let resolved = out.canonicalize().unwrap_or_else(|_| out.to_path_buf());
    println!("Saved {} toots to {}", posts.len(), resolved.display());
    Ok(())
}

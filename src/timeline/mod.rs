//! Timeline scraping pipeline.
//!
//! A browser session scrolls a public timeline a fixed number of times;
//! after each scroll the rendered DOM is snapshotted and every `article`
//! is extracted (`extract`), deduplicated keep-first by status id
//! (`collect`), then enriched once with engagement counts (`enrich`).

pub mod collect;
pub mod enrich;
pub mod extract;

use crate::renderer::TimelineSession;
use crate::tabular::{Cell, Table};
use anyhow::Result;
use collect::PostCollector;
use std::time::Duration;

/// One scraped status. `id` is the natural key; every other field may be
/// missing when its selector found nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedPost {
    pub id: Option<String>,
    pub permalink: Option<String>,
    /// ISO-8601 string as rendered in the page's `time` element.
    pub datetime: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub content_text: Option<String>,
    pub content_html: Option<String>,
    pub replies_count: Option<u64>,
    pub reblogs_count: Option<u64>,
    pub favourites_count: Option<u64>,
}

/// Scroll budget and pacing for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Number of scroll passes. A budget, not a termination condition:
    /// exhausted timelines make later passes no-ops.
    pub scrolls: u32,
    /// Wait after each scroll.
    pub scroll_delay: Duration,
    /// Wait after the initial page load.
    pub settle: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            scrolls: 5,
            scroll_delay: Duration::from_secs(3),
            settle: Duration::from_secs(5),
        }
    }
}

/// Drive the session through its scroll passes, collecting posts.
///
/// The caller owns the session and is responsible for closing it on every
/// exit path, including when this returns an error mid-scroll.
pub async fn collect_posts(
    session: &mut dyn TimelineSession,
    url: &str,
    opts: &ScrapeOptions,
) -> Result<PostCollector> {
    session.navigate(url).await?;
    tokio::time::sleep(opts.settle).await;

    let mut collector = PostCollector::new();
    for pass in 1..=opts.scrolls {
        session.scroll_to_bottom().await?;
        tokio::time::sleep(opts.scroll_delay).await;

        let html = session.html().await?;
        for post in extract::extract_posts(&html) {
            collector.insert(post);
        }
        println!(
            "Scroll {pass}/{} - collected {} toots",
            opts.scrolls,
            collector.len()
        );
    }
    Ok(collector)
}

/// Column order of the exported sheet.
pub const POST_COLUMNS: [&str; 10] = [
    "id",
    "permalink",
    "datetime",
    "username",
    "display_name",
    "content_text",
    "content_html",
    "replies_count",
    "reblogs_count",
    "favourites_count",
];

fn text_cell(value: &Option<String>) -> Cell {
    value.clone().map(Cell::Text).unwrap_or(Cell::Empty)
}

fn count_cell(value: Option<u64>) -> Cell {
    value.map(|n| Cell::Number(n as f64)).unwrap_or(Cell::Empty)
}

/// Project collected posts onto the fixed export schema.
pub fn posts_table(posts: &[ScrapedPost]) -> Table {
    let mut table = Table::new(POST_COLUMNS);
    for post in posts {
        table.push_row(vec![
            text_cell(&post.id),
            text_cell(&post.permalink),
            text_cell(&post.datetime),
            text_cell(&post.username),
            text_cell(&post.display_name),
            text_cell(&post.content_text),
            text_cell(&post.content_html),
            count_cell(post.replies_count),
            count_cell(post.reblogs_count),
            count_cell(post.favourites_count),
        ]);
    }
    table
}

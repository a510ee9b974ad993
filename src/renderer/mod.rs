//! Browser abstraction for timeline scraping.
//!
//! `TimelineSession` hides the browser engine (currently Chromium via
//! chromiumoxide) behind the small surface the scrape loop needs: navigate,
//! scroll, snapshot the DOM, close. Tests substitute a scripted session.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// A live browser tab pointed at a timeline.
#[async_trait]
pub trait TimelineSession: Send {
    /// Navigate to a URL and wait for the initial load.
    async fn navigate(&mut self, url: &str) -> Result<()>;
    /// Scroll the page to its current bottom.
    async fn scroll_to_bottom(&mut self) -> Result<()>;
    /// Snapshot the rendered DOM as outer HTML.
    async fn html(&mut self) -> Result<String>;
    /// Close the session, releasing the browser.
    async fn close(self: Box<Self>) -> Result<()>;
}

//! Chromium-backed timeline session using chromiumoxide.

use super::TimelineSession;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. FEDISNAP_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("FEDISNAP_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. ~/.fedisnap/chromium/ (Chrome for Testing layout)
    if let Some(home) = dirs::home_dir() {
        let candidates = if cfg!(target_os = "macos") {
            vec![
                home.join(".fedisnap/chromium/chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".fedisnap/chromium/chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".fedisnap/chromium/chrome"),
            ]
        } else {
            vec![
                home.join(".fedisnap/chromium/chrome-linux64/chrome"),
                home.join(".fedisnap/chromium/chrome"),
            ]
        };
        for c in candidates {
            if c.exists() {
                return Some(c);
            }
        }
    }

    // 3. System PATH
    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 4. Common macOS locations
    if cfg!(target_os = "macos") {
        let common = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// One Chromium instance with a single page.
pub struct ChromiumSession {
    browser: Browser,
    page: Page,
}

impl ChromiumSession {
    /// Launch Chromium (headless unless `headful`) with one blank page.
    pub async fn launch(headful: bool) -> Result<Self> {
        let chrome_path = find_chromium()
            .context("Chromium not found. Set FEDISNAP_CHROMIUM_PATH or install Chrome.")?;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking");
        if headful {
            builder = builder.with_head();
        } else {
            builder = builder.arg("--headless=new");
        }
        let config = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // Drain CDP events; the driver stalls without a consumer
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to create page")?;

        Ok(Self { browser, page })
    }
}

#[async_trait]
impl TimelineSession for ChromiumSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .with_context(|| format!("navigation to {url} failed"))?;
        // Best effort; some pages never fire the final navigation event
        let _ = self.page.wait_for_navigation().await;
        Ok(())
    }

    async fn scroll_to_bottom(&mut self) -> Result<()> {
        self.page
            .evaluate("window.scrollTo(0, document.body.scrollHeight);")
            .await
            .context("scroll script failed")?;
        Ok(())
    }

    async fn html(&mut self) -> Result<String> {
        let result = self
            .page
            .evaluate("document.documentElement.outerHTML")
            .await
            .context("DOM snapshot failed")?;
        result
            .into_value()
            .map_err(|e| anyhow::anyhow!("failed to read DOM snapshot: {e:?}"))
    }

    async fn close(mut self: Box<Self>) -> Result<()> {
        self.browser.close().await.context("browser close failed")?;
        let _ = self.browser.wait().await;
        Ok(())
    }
}

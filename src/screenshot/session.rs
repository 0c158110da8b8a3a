//! Browser session plumbing for screenshot capture
//!
//! One `BrowserSession` spans both capture strategies: the fallback reuses
//! the primary attempt's page rather than starting a fresh context.

use anyhow::{Context, Result, anyhow};
use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, CaptureScreenshotParams,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use url::Url;

use super::timeout::with_op_timeout;
use crate::browser_setup::launch_browser;
use crate::config::ScrapeConfig;

/// The operations one capture attempt is built from.
///
/// The state machine drives these strictly in order; tests substitute a
/// scripted implementation so both strategies can be exercised without a
/// Chromium install.
#[allow(async_fn_in_trait)]
pub trait CaptureSession {
    async fn navigate(&mut self, target: &Url) -> Result<()>;
    async fn wait_body_ready(&mut self) -> Result<()>;
    async fn capture_full_page(&mut self, quality: u8) -> Result<Vec<u8>>;
    async fn fix_viewport(&mut self, width: u32, height: u32) -> Result<()>;
    async fn capture_viewport(&mut self) -> Result<Vec<u8>>;
}

/// Live chromiumoxide session: the browser process, its CDP handler task,
/// the temp profile directory, and the single page threaded through both
/// capture attempts.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
    page: Page,
    navigation_timeout: Duration,
    body_ready_timeout: Duration,
}

impl BrowserSession {
    /// Launch a headless browser and open the blank page both capture
    /// attempts will share.
    pub async fn launch(config: &ScrapeConfig) -> Result<Self> {
        let (browser, handler, user_data_dir) = launch_browser().await?;
        let page = browser
            .new_page("about:blank")
            .await
            .context("Failed to open page")?;

        Ok(Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
            page,
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs()),
            body_ready_timeout: Duration::from_secs(config.body_ready_timeout_secs()),
        })
    }

    /// Tear the session down: close Chromium, stop the handler task, and
    /// remove the temp profile.
    ///
    /// Must run on every exit path; `Drop` covers the paths where it is
    /// never reached. The profile dir is removed only after the browser
    /// has exited and released its file handles.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed waiting for browser exit: {e}");
        }
        self.handler.abort();

        if let Some(dir) = self.user_data_dir.take()
            && let Err(e) = std::fs::remove_dir_all(&dir)
        {
            warn!(
                "Failed to remove profile directory {}: {e}. Manual cleanup may be required.",
                dir.display()
            );
        }
        info!("Browser session shut down");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop kills the Chromium process; the profile directory
        // is the only thing left to reap when shutdown() was skipped.
        if let Some(dir) = self.user_data_dir.take()
            && let Err(e) = std::fs::remove_dir_all(&dir)
        {
            warn!(
                "Failed to remove profile directory {} in Drop: {e}",
                dir.display()
            );
        }
    }
}

impl CaptureSession for BrowserSession {
    async fn navigate(&mut self, target: &Url) -> Result<()> {
        with_op_timeout(
            async {
                self.page
                    .goto(target.as_str())
                    .await
                    .map(|_| ())
                    .map_err(|e| anyhow!("{e}"))
            },
            self.navigation_timeout,
            "Page navigation",
        )
        .await?;

        with_op_timeout(
            async {
                self.page
                    .wait_for_navigation()
                    .await
                    .map(|_| ())
                    .map_err(|e| anyhow!("{e}"))
            },
            self.navigation_timeout,
            "Page load",
        )
        .await
    }

    /// Readiness gate: poll for the body element instead of sleeping a
    /// fixed interval. JS-heavy pages attach their body well after the
    /// HTTP response arrives.
    async fn wait_body_ready(&mut self) -> Result<()> {
        let start = Instant::now();
        let poll_interval = Duration::from_millis(100);

        loop {
            match self.page.find_element("body").await {
                Ok(_) => return Ok(()),
                Err(_) if start.elapsed() >= self.body_ready_timeout => {
                    return Err(anyhow!(
                        "document body not present after {:?}",
                        self.body_ready_timeout
                    ));
                }
                Err(_) => tokio::time::sleep(poll_interval).await,
            }
        }
    }

    async fn capture_full_page(&mut self, quality: u8) -> Result<Vec<u8>> {
        let params = CaptureScreenshotParams {
            format: Some(CaptureScreenshotFormat::Jpeg),
            quality: Some(i64::from(quality)),
            capture_beyond_viewport: Some(true),
            ..Default::default()
        };

        self.page
            .screenshot(params)
            .await
            .map_err(|e| anyhow!("Full-page screenshot failed: {e}"))
    }

    async fn fix_viewport(&mut self, width: u32, height: u32) -> Result<()> {
        self.page
            .execute(
                SetDeviceMetricsOverrideParams::builder()
                    .width(i64::from(width))
                    .height(i64::from(height))
                    .device_scale_factor(1.0)
                    .mobile(false)
                    .build()
                    .map_err(anyhow::Error::msg)?,
            )
            .await?;
        Ok(())
    }

    async fn capture_viewport(&mut self) -> Result<Vec<u8>> {
        // CDP default format (PNG), visible viewport only.
        self.page
            .screenshot(CaptureScreenshotParams::default())
            .await
            .map_err(|e| anyhow!("Viewport screenshot failed: {e}"))
    }
}

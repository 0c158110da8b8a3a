//! Screenshot capture with a primary full-page strategy and a
//! fixed-viewport fallback, both driven through one browser session.

pub mod session;
mod timeout;

pub use session::{BrowserSession, CaptureSession};

use anyhow::Result;
use log::warn;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::config::ScrapeConfig;
use crate::errors::CaptureError;
use crate::utils::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH};

/// Which capture strategy produced a screenshot's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStrategy {
    /// The primary strategy: full scrollable content, JPEG at fixed
    /// quality.
    FullPage,
    /// The fallback strategy: visible viewport only, at a fixed desktop
    /// size, after the full-page attempt failed.
    FixedViewport,
}

impl fmt::Display for CaptureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullPage => write!(f, "full-page"),
            Self::FixedViewport => write!(f, "viewport"),
        }
    }
}

/// Image bytes tagged with the strategy that produced them.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub bytes: Vec<u8>,
    pub strategy: CaptureStrategy,
}

/// Capture a rendering of `target`.
///
/// Launches one headless session, runs the full-page strategy and, if it
/// fails, the viewport fallback on the same session, all under a single
/// deadline. The session is torn down on every exit path, deadline expiry
/// included.
pub async fn capture(target: &Url, config: &ScrapeConfig) -> Result<Screenshot, CaptureError> {
    let deadline = Duration::from_secs(config.capture_deadline_secs());
    let mut session = BrowserSession::launch(config).await?;

    let outcome = match tokio::time::timeout(
        deadline,
        capture_with_session(&mut session, target, config.screenshot_quality()),
    )
    .await
    {
        Ok(result) => result.map_err(CaptureError::from),
        Err(_) => Err(CaptureError::DeadlineExceeded(deadline)),
    };

    session.shutdown().await;
    outcome
}

/// Drive the two capture strategies over an existing session.
///
/// The fallback reuses the session and page of the failed full-page
/// attempt; it re-navigates, fixes the viewport to a standard desktop
/// size, and captures only what is visible. When both strategies fail,
/// the full-page error is reported: it reflects the first contact with
/// the page and is the more informative root cause. The fallback error
/// is only logged.
pub async fn capture_with_session<S: CaptureSession>(
    session: &mut S,
    target: &Url,
    quality: u8,
) -> Result<Screenshot> {
    let primary_err = match full_page_attempt(session, target, quality).await {
        Ok(bytes) => {
            return Ok(Screenshot {
                bytes,
                strategy: CaptureStrategy::FullPage,
            });
        }
        Err(e) => e,
    };
    warn!("Full-page capture of {target} failed: {primary_err:#}; retrying with fixed viewport");

    match viewport_attempt(session, target).await {
        Ok(bytes) => Ok(Screenshot {
            bytes,
            strategy: CaptureStrategy::FixedViewport,
        }),
        Err(fallback_err) => {
            warn!("Viewport capture of {target} also failed: {fallback_err:#}");
            Err(primary_err)
        }
    }
}

async fn full_page_attempt<S: CaptureSession>(
    session: &mut S,
    target: &Url,
    quality: u8,
) -> Result<Vec<u8>> {
    session.navigate(target).await?;
    session.wait_body_ready().await?;
    session.capture_full_page(quality).await
}

async fn viewport_attempt<S: CaptureSession>(session: &mut S, target: &Url) -> Result<Vec<u8>> {
    session.navigate(target).await?;
    session.wait_body_ready().await?;
    session
        .fix_viewport(FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
        .await?;
    session.capture_viewport().await
}

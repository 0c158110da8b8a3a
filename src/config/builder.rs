//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring that the storage directory and target URL are set
//! before building a `ScrapeConfig`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use crate::utils::{
    BODY_READY_TIMEOUT_SECS, CAPTURE_DEADLINE_SECS, FETCH_TIMEOUT_SECS, MAX_HTML_BYTES,
    NAVIGATION_TIMEOUT_SECS, SCREENSHOT_QUALITY,
};

use super::types::ScrapeConfig;

// Type states for the builder
pub struct WithStorageDir;
pub struct WithTargetUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) storage_dir: Option<PathBuf>,
    pub(crate) target_url: Option<String>,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) max_html_bytes: usize,
    pub(crate) capture_deadline_secs: u64,
    pub(crate) navigation_timeout_secs: u64,
    pub(crate) body_ready_timeout_secs: u64,
    pub(crate) screenshot_quality: u8,
    pub(crate) save_screenshot: bool,
    pub(crate) save_links: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storage_dir: None,
            target_url: None,
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            max_html_bytes: MAX_HTML_BYTES,
            capture_deadline_secs: CAPTURE_DEADLINE_SECS,
            navigation_timeout_secs: NAVIGATION_TIMEOUT_SECS,
            body_ready_timeout_secs: BODY_READY_TIMEOUT_SECS,
            screenshot_quality: SCREENSHOT_QUALITY,
            save_screenshot: true,
            save_links: true,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent
    /// interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn storage_dir(self, dir: impl Into<PathBuf>) -> ScrapeConfigBuilder<WithStorageDir> {
        ScrapeConfigBuilder {
            storage_dir: Some(dir.into()),
            target_url: self.target_url,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_html_bytes: self.max_html_bytes,
            capture_deadline_secs: self.capture_deadline_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            body_ready_timeout_secs: self.body_ready_timeout_secs,
            screenshot_quality: self.screenshot_quality,
            save_screenshot: self.save_screenshot,
            save_links: self.save_links,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<WithStorageDir> {
    /// Set the target URL.
    ///
    /// The string is stored untouched; `scrape()` normalizes and validates
    /// it so bad input fails the run with a proper error instead of a
    /// config-time panic.
    pub fn target_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithTargetUrl> {
        ScrapeConfigBuilder {
            storage_dir: self.storage_dir,
            target_url: Some(url.into()),
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_html_bytes: self.max_html_bytes,
            capture_deadline_secs: self.capture_deadline_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            body_ready_timeout_secs: self.body_ready_timeout_secs,
            screenshot_quality: self.screenshot_quality,
            save_screenshot: self.save_screenshot,
            save_links: self.save_links,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithTargetUrl> {
    pub fn build(self) -> Result<ScrapeConfig> {
        if self.screenshot_quality > 100 {
            return Err(anyhow!(
                "screenshot_quality must be 0-100, got {}",
                self.screenshot_quality
            ));
        }

        Ok(ScrapeConfig {
            storage_dir: self
                .storage_dir
                .ok_or_else(|| anyhow!("storage_dir is required"))?,
            target_url: self
                .target_url
                .ok_or_else(|| anyhow!("target_url is required"))?,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_html_bytes: self.max_html_bytes,
            capture_deadline_secs: self.capture_deadline_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            body_ready_timeout_secs: self.body_ready_timeout_secs,
            screenshot_quality: self.screenshot_quality,
            save_screenshot: self.save_screenshot,
            save_links: self.save_links,
        })
    }
}

// Optional settings available at any builder state
impl<State> ScrapeConfigBuilder<State> {
    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_html_bytes(mut self, bytes: usize) -> Self {
        self.max_html_bytes = bytes;
        self
    }

    #[must_use]
    pub fn capture_deadline_secs(mut self, secs: u64) -> Self {
        self.capture_deadline_secs = secs;
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn body_ready_timeout_secs(mut self, secs: u64) -> Self {
        self.body_ready_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn screenshot_quality(mut self, quality: u8) -> Self {
        self.screenshot_quality = quality;
        self
    }

    #[must_use]
    pub fn save_screenshot(mut self, save: bool) -> Self {
        self.save_screenshot = save;
        self
    }

    #[must_use]
    pub fn save_links(mut self, save: bool) -> Self {
        self.save_links = save;
        self
    }
}

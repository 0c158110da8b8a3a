//! Getter methods for `ScrapeConfig`
//!
//! This module provides the accessor methods for retrieving configuration
//! values from a `ScrapeConfig` instance.

use std::path::Path;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    #[must_use]
    pub fn max_html_bytes(&self) -> usize {
        self.max_html_bytes
    }

    #[must_use]
    pub fn capture_deadline_secs(&self) -> u64 {
        self.capture_deadline_secs
    }

    #[must_use]
    pub fn navigation_timeout_secs(&self) -> u64 {
        self.navigation_timeout_secs
    }

    #[must_use]
    pub fn body_ready_timeout_secs(&self) -> u64 {
        self.body_ready_timeout_secs
    }

    #[must_use]
    pub fn screenshot_quality(&self) -> u8 {
        self.screenshot_quality
    }

    #[must_use]
    pub fn save_screenshot(&self) -> bool {
        self.save_screenshot
    }

    #[must_use]
    pub fn save_links(&self) -> bool {
        self.save_links
    }
}

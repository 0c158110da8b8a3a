//! Core configuration type for single-page scrapes
//!
//! This module contains the `ScrapeConfig` struct that defines where
//! artifacts land, which page to fetch, and the resource bounds every
//! pipeline stage runs under.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct for one scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Directory receiving the HTML, screenshot, and link artifacts.
    pub(crate) storage_dir: PathBuf,

    /// Raw target URL exactly as supplied by the caller.
    ///
    /// Normalization (scheme defaulting, validation) happens at scrape
    /// time, so invalid input fails the run rather than config creation.
    pub(crate) target_url: String,

    /// Overall fetch timeout in seconds, connect through last body byte
    pub(crate) fetch_timeout_secs: u64,

    /// Hard cap on the fetched body size in bytes
    pub(crate) max_html_bytes: usize,

    /// Overall screenshot deadline in seconds, both strategies included
    pub(crate) capture_deadline_secs: u64,

    /// Timeout in seconds for a single navigation operation
    pub(crate) navigation_timeout_secs: u64,

    /// How long the readiness gate polls for the document body element
    pub(crate) body_ready_timeout_secs: u64,

    /// JPEG quality for the full-page capture
    pub(crate) screenshot_quality: u8,

    pub(crate) save_screenshot: bool,
    pub(crate) save_links: bool,
}

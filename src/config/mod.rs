//! Configuration module for single-page scrapes
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring a scrape run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithStorageDir, WithTargetUrl};
pub use types::ScrapeConfig;

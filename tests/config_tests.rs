//! Tests for the type-safe configuration builder pattern

use sitesnap::config::ScrapeConfig;
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_builder_requires_storage_dir_and_target_url() {
    // This should not compile if uncommented - testing compile-time guarantees
    // let config = ScrapeConfig::builder().build();

    // This should also not compile - missing target_url
    // let config = ScrapeConfig::builder()
    //     .storage_dir("/tmp")
    //     .build();

    // This SHOULD compile - both required fields provided
    let temp_dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .storage_dir(temp_dir.path())
        .target_url("https://example.com")
        .build()
        .unwrap();

    assert_eq!(config.storage_dir(), temp_dir.path());
    assert_eq!(config.target_url(), "https://example.com");
}

#[tokio::test]
async fn test_builder_optional_fields_have_defaults() {
    let config = ScrapeConfig::builder()
        .storage_dir(Path::new("."))
        .target_url("https://example.com")
        .build()
        .unwrap();

    // Check defaults
    assert_eq!(config.fetch_timeout_secs(), 20);
    assert_eq!(config.max_html_bytes(), 10 * 1024 * 1024);
    assert_eq!(config.capture_deadline_secs(), 30);
    assert_eq!(config.screenshot_quality(), 90);
    assert!(config.save_screenshot());
    assert!(config.save_links());
}

#[tokio::test]
async fn test_builder_with_all_optional_fields() {
    let config = ScrapeConfig::builder()
        .storage_dir(Path::new("."))
        .target_url("https://example.com")
        .fetch_timeout_secs(5)
        .max_html_bytes(4096)
        .capture_deadline_secs(10)
        .navigation_timeout_secs(3)
        .body_ready_timeout_secs(2)
        .screenshot_quality(75)
        .save_screenshot(false)
        .save_links(false)
        .build()
        .unwrap();

    assert_eq!(config.fetch_timeout_secs(), 5);
    assert_eq!(config.max_html_bytes(), 4096);
    assert_eq!(config.capture_deadline_secs(), 10);
    assert_eq!(config.navigation_timeout_secs(), 3);
    assert_eq!(config.body_ready_timeout_secs(), 2);
    assert_eq!(config.screenshot_quality(), 75);
    assert!(!config.save_screenshot());
    assert!(!config.save_links());
}

#[tokio::test]
async fn test_builder_rejects_out_of_range_quality() {
    let result = ScrapeConfig::builder()
        .storage_dir(Path::new("."))
        .target_url("https://example.com")
        .screenshot_quality(101)
        .build();

    assert!(result.is_err());
}

#[tokio::test]
async fn test_target_url_is_stored_untouched() {
    // Normalization is scrape-time behavior; the builder must not second-
    // guess the caller's input.
    let config = ScrapeConfig::builder()
        .storage_dir(Path::new("."))
        .target_url("example.com/no-scheme")
        .build()
        .unwrap();

    assert_eq!(config.target_url(), "example.com/no-scheme");
}

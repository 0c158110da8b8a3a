//! End-to-end pipeline tests against a local mock server
//!
//! Screenshot capture is disabled so these run without a Chromium install;
//! the capture strategies have their own scripted-session tests.

use sitesnap::ScrapeConfig;
use sitesnap::errors::ScrapeError;
use tempfile::TempDir;

#[tokio::test]
async fn test_scrape_writes_html_and_link_artifacts() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"<html><body>
        <a href="/a">one</a>
        <a href="b.html">two</a>
        <a href="https://ext.test/c">three</a>
        <a href="mailto:x@y.test">mail</a>
        <a href="">empty</a>
    </body></html>"#;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(html)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .storage_dir(dir.path())
        .target_url(server.url())
        .save_screenshot(false)
        .build()
        .unwrap();

    let summary = sitesnap::scrape(config).await.unwrap();

    assert_eq!(summary.status.as_u16(), 200);
    assert_eq!(summary.link_count, 3);
    assert!(summary.screenshot.is_none());

    let saved_html = tokio::fs::read_to_string(&summary.html_path).await.unwrap();
    assert_eq!(saved_html, html);

    let base = summary.target.as_str().trim_end_matches('/').to_string();
    let links = tokio::fs::read_to_string(summary.links_path.unwrap())
        .await
        .unwrap();
    assert_eq!(
        links,
        format!("{base}/a\n{base}/b.html\nhttps://ext.test/c\n")
    );
}

#[tokio::test]
async fn test_non_2xx_fetch_is_a_warning_not_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(500)
        .with_body(r#"<html><body><a href="/err">still parsed</a></body></html>"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .storage_dir(dir.path())
        .target_url(server.url())
        .save_screenshot(false)
        .build()
        .unwrap();

    let summary = sitesnap::scrape(config).await.unwrap();

    assert_eq!(summary.status.as_u16(), 500);
    assert_eq!(summary.link_count, 1);
}

#[tokio::test]
async fn test_invalid_target_aborts_before_any_io() {
    let dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .storage_dir(dir.path())
        .target_url("ftp://example.com/pub")
        .save_screenshot(false)
        .build()
        .unwrap();

    let err = sitesnap::scrape(config).await.unwrap_err();

    assert!(matches!(err, ScrapeError::UnsupportedScheme(_)));
    assert!(!dir.path().join("site_data.html").exists());
}

#[tokio::test]
async fn test_oversized_page_fails_the_run() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("x".repeat(4096))
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .storage_dir(dir.path())
        .target_url(server.url())
        .max_html_bytes(1024)
        .save_screenshot(false)
        .build()
        .unwrap();

    let err = sitesnap::scrape(config).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch(_)));
}

#[tokio::test]
async fn test_pages_without_links_still_produce_an_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html><body><p>no anchors</p></body></html>")
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = ScrapeConfig::builder()
        .storage_dir(dir.path())
        .target_url(server.url())
        .save_screenshot(false)
        .build()
        .unwrap();

    let summary = sitesnap::scrape(config).await.unwrap();

    assert_eq!(summary.link_count, 0);
    let links = tokio::fs::read_to_string(summary.links_path.unwrap())
        .await
        .unwrap();
    assert!(links.is_empty());
}

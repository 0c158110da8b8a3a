pub mod browser_setup;
pub mod config;
pub mod content_saver;
pub mod errors;
pub mod fetcher;
pub mod link_extractor;
pub mod screenshot;
pub mod utils;

pub use config::ScrapeConfig;
pub use errors::{CaptureError, ExtractionError, FetchError, ScrapeError, ScrapeResult};
pub use fetcher::FetchedPage;
pub use screenshot::{CaptureSession, CaptureStrategy, Screenshot};
pub use utils::normalize_url;

use std::path::PathBuf;
use std::time::Duration;

use log::{info, warn};
use reqwest::StatusCode;
use url::Url;

use crate::utils::HTML_FILENAME;

/// What one scrape run produced.
#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    /// The normalized target the pipeline actually ran against.
    pub target: Url,
    /// Final HTTP status of the fetch, after redirects.
    pub status: StatusCode,
    pub html_path: PathBuf,
    /// Screenshot artifact and the strategy that produced it, when capture
    /// and persistence both succeeded.
    pub screenshot: Option<(PathBuf, CaptureStrategy)>,
    pub links_path: Option<PathBuf>,
    pub link_count: usize,
}

/// Run the full pipeline for one page.
///
/// The mandatory path is normalize, fetch, persist HTML; any failure there
/// aborts the run. Screenshot capture and link extraction degrade to
/// warnings so a stubborn page still yields its markup.
pub async fn scrape(config: ScrapeConfig) -> ScrapeResult<ScrapeSummary> {
    let target = utils::normalize_url(config.target_url())?;
    info!("Scraping {target}");

    let page = fetcher::fetch_html(
        &target,
        Duration::from_secs(config.fetch_timeout_secs()),
        config.max_html_bytes(),
    )
    .await?;
    if !page.status.is_success() {
        warn!(
            "Server answered HTTP {}; processing the body anyway",
            page.status.as_u16()
        );
    }

    let html_path = content_saver::save_html(&page.body, config.storage_dir())
        .await
        .map_err(|source| ScrapeError::Persist {
            artifact: HTML_FILENAME,
            source,
        })?;
    info!("Saved raw HTML to {}", html_path.display());

    let screenshot = if config.save_screenshot() {
        take_screenshot(&target, &config).await
    } else {
        None
    };

    let (links_path, link_count) = if config.save_links() {
        extract_and_save_links(&target, &page.body, &config).await
    } else {
        (None, 0)
    };

    Ok(ScrapeSummary {
        target,
        status: page.status,
        html_path,
        screenshot,
        links_path,
        link_count,
    })
}

async fn take_screenshot(
    target: &Url,
    config: &ScrapeConfig,
) -> Option<(PathBuf, CaptureStrategy)> {
    match screenshot::capture(target, config).await {
        Ok(shot) => match content_saver::save_screenshot(&shot, config.storage_dir()).await {
            Ok(path) => {
                info!("Saved {} screenshot to {}", shot.strategy, path.display());
                Some((path, shot.strategy))
            }
            Err(e) => {
                warn!("Failed to write screenshot: {e}");
                None
            }
        },
        Err(e) => {
            warn!("Screenshot capture failed: {e}");
            None
        }
    }
}

async fn extract_and_save_links(
    target: &Url,
    body: &[u8],
    config: &ScrapeConfig,
) -> (Option<PathBuf>, usize) {
    match link_extractor::extract_links(target, body) {
        Ok(links) => match content_saver::save_links(&links, config.storage_dir()).await {
            Ok(path) => {
                info!("Saved {} links to {}", links.len(), path.display());
                (Some(path), links.len())
            }
            Err(e) => {
                warn!("Failed to write link list: {e}");
                (None, links.len())
            }
        },
        Err(e) => {
            warn!("Link extraction failed: {e}");
            (None, 0)
        }
    }
}

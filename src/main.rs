// Single-page snapshot CLI.
//
// Fetches one URL, saves its raw markup, captures a rendering through a
// headless browser, and writes the deduplicated list of links it contains.

use std::process::ExitCode;

use sitesnap::ScrapeConfig;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("chromiumoxide::handler", log::LevelFilter::Off)
        .filter_module("chromiumoxide::conn", log::LevelFilter::Off)
        .init();

    let Some(raw) = std::env::args().nth(1) else {
        eprintln!("Usage: sitesnap <url>");
        return ExitCode::FAILURE;
    };

    let config = match ScrapeConfig::builder()
        .storage_dir(".")
        .target_url(raw.trim())
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match sitesnap::scrape(config).await {
        Ok(summary) => {
            log::info!(
                "Done: {} (HTTP {}, {} links)",
                summary.target,
                summary.status.as_u16(),
                summary.link_count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Scrape failed: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Artifact persistence
//!
//! Each scrape run writes up to three artifacts under fixed well-known
//! filenames in the storage directory. Callers decide which write failures
//! are fatal; only the raw HTML is mandatory.

use std::io;
use std::path::{Path, PathBuf};

use crate::screenshot::Screenshot;
use crate::utils::{HTML_FILENAME, LINKS_FILENAME, SCREENSHOT_FILENAME};

/// Write the raw fetched markup.
pub async fn save_html(body: &[u8], storage_dir: &Path) -> io::Result<PathBuf> {
    write_artifact(storage_dir, HTML_FILENAME, body).await
}

/// Write the captured page rendering.
pub async fn save_screenshot(shot: &Screenshot, storage_dir: &Path) -> io::Result<PathBuf> {
    write_artifact(storage_dir, SCREENSHOT_FILENAME, &shot.bytes).await
}

/// Write the resolved link list, one absolute URL per line.
///
/// No links is a valid outcome and produces an empty file.
pub async fn save_links(links: &[String], storage_dir: &Path) -> io::Result<PathBuf> {
    let contents = if links.is_empty() {
        String::new()
    } else {
        let mut joined = links.join("\n");
        joined.push('\n');
        joined
    };
    write_artifact(storage_dir, LINKS_FILENAME, contents.as_bytes()).await
}

async fn write_artifact(storage_dir: &Path, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    tokio::fs::create_dir_all(storage_dir).await?;
    let path = storage_dir.join(filename);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

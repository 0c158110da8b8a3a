//! Locating and launching a headless Chromium for page capture.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use futures::StreamExt;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tracing::{error, info, warn};

/// Find a Chrome/Chromium executable on the system.
///
/// The `CHROMIUM_PATH` environment variable overrides all other methods;
/// otherwise well-known install locations are probed, then `which` as a
/// last resort.
pub async fn find_browser_executable() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!(
                "Using browser from CHROMIUM_PATH environment variable: {}",
                path.display()
            );
            return Ok(path);
        }
        warn!(
            "CHROMIUM_PATH environment variable points to non-existent file: {}",
            path.display()
        );
    }

    let paths = if cfg!(target_os = "macos") {
        vec![
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "~/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "~/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/opt/homebrew/bin/chromium",
        ]
    } else {
        // Linux
        vec![
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/usr/local/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
    };

    for path_str in paths {
        let path = if let Some(rest) = path_str.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            }
        } else {
            PathBuf::from(path_str)
        };

        if path.exists() {
            info!("Found browser at: {}", path.display());
            return Ok(path);
        }
    }

    for cmd in &["chromium", "chromium-browser", "google-chrome", "chrome"] {
        let output = Command::new("which").arg(cmd).output();

        if let Ok(output) = output
            && output.status.success()
        {
            let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path_str.is_empty() {
                let path = PathBuf::from(path_str);
                info!("Found browser using 'which' command: {}", path.display());
                return Ok(path);
            }
        }
    }

    Err(anyhow::anyhow!(
        "Chrome/Chromium executable not found; install one or set CHROMIUM_PATH"
    ))
}

/// Launch a headless browser suitable for constrained environments.
///
/// GPU acceleration and the OS sandbox are disabled so the session also
/// runs inside containers without extra privileges. Returns the browser,
/// the tracked CDP handler task, and the temp profile directory the caller
/// must remove once the browser has exited.
///
/// # Handler Lifecycle
/// The returned `JoinHandle` MUST be aborted when done, or the handler task
/// keeps running after the browser is closed.
pub async fn launch_browser() -> Result<(Browser, JoinHandle<()>, PathBuf)> {
    let chrome_path = find_browser_executable().await?;

    // Unique profile per process so concurrent invocations never contend
    // on a profile lock.
    let user_data_dir =
        std::env::temp_dir().join(format!("sitesnap_chrome_{}", std::process::id()));
    std::fs::create_dir_all(&user_data_dir).context("Failed to create user data directory")?;

    let browser_config = BrowserConfigBuilder::default()
        .request_timeout(Duration::from_secs(30))
        .window_size(1366, 768)
        .user_data_dir(user_data_dir.clone())
        .chrome_executable(chrome_path)
        .headless_mode(HeadlessMode::default())
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-setuid-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--hide-scrollbars")
        .arg("--mute-audio")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

    info!("Launching headless browser");
    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("Failed to launch browser")?;

    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                error!("Browser handler error: {:?}", e);
            }
        }
        info!("Browser handler task completed");
    });

    Ok((browser, handler_task, user_data_dir))
}

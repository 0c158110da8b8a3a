//! Shared configuration constants for sitesnap
//!
//! Default values and fixed artifact names used throughout the codebase to
//! ensure consistency and avoid magic numbers.

/// Identifying User-Agent sent with the raw HTML fetch.
pub const FETCH_USER_AGENT: &str = "sitesnap/0.1";

/// Hard cap on a fetched HTML body: 10 MiB.
///
/// Enforced while streaming, independent of any Content-Length header,
/// since a server may lie about the length or stream indefinitely.
pub const MAX_HTML_BYTES: usize = 10 * 1024 * 1024;

/// Overall fetch timeout in seconds, connect through last body byte.
pub const FETCH_TIMEOUT_SECS: u64 = 20;

/// Overall screenshot deadline in seconds, both strategies included.
///
/// Expiry aborts whichever attempt is in flight; the browser session is
/// still torn down afterwards.
pub const CAPTURE_DEADLINE_SECS: u64 = 30;

/// Screenshot quality: 90% JPEG compression for the full-page capture
///
/// High enough to keep page text legible in the snapshot. Dropping to 80
/// roughly halves the file size but softens small glyphs.
pub const SCREENSHOT_QUALITY: u8 = 90;

/// Timeout in seconds for a single navigation operation (`page.goto()` or
/// `page.wait_for_navigation()`).
///
/// Deliberately shorter than [`CAPTURE_DEADLINE_SECS`] so a stalled
/// full-page attempt leaves headroom for the viewport fallback.
pub const NAVIGATION_TIMEOUT_SECS: u64 = 10;

/// How long the readiness gate polls for the document body element.
pub const BODY_READY_TIMEOUT_SECS: u64 = 5;

/// Fallback viewport width: a standard desktop size used when the
/// full-page capture fails and only the visible viewport is captured.
pub const FALLBACK_VIEWPORT_WIDTH: u32 = 1366;

/// Fallback viewport height, paired with [`FALLBACK_VIEWPORT_WIDTH`].
pub const FALLBACK_VIEWPORT_HEIGHT: u32 = 768;

/// Artifact filename for the raw fetched markup.
pub const HTML_FILENAME: &str = "site_data.html";

/// Artifact filename for the page rendering.
///
/// The name is fixed regardless of which capture strategy produced the
/// bytes.
pub const SCREENSHOT_FILENAME: &str = "screenshot.png";

/// Artifact filename for the resolved link list, one URL per line.
pub const LINKS_FILENAME: &str = "links.txt";

//! Error types for the scrape pipeline
//!
//! Mandatory-path failures (URL validation, fetch, HTML persistence) surface
//! as `ScrapeError` and abort a run. Capture and extraction have their own
//! error types because the orchestrator downgrades them to warnings.

use std::time::Duration;

/// Convenience alias for Result with `ScrapeError`
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Errors that abort a scrape run
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The supplied string could not be parsed as an absolute URL
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },

    /// The URL parsed, but its scheme is not fetchable by this tool
    #[error("unsupported scheme '{0}' (only http and https are accepted)")]
    UnsupportedScheme(String),

    /// The page fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A mandatory artifact could not be written
    #[error("failed to write {artifact}: {source}")]
    Persist {
        artifact: &'static str,
        source: std::io::Error,
    },
}

/// Errors from the bounded HTML fetch
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, or protocol failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The overall fetch deadline elapsed
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The streamed body grew past the hard cap
    #[error("response body exceeded the {limit}-byte cap")]
    BodyTooLarge { limit: usize },
}

/// Errors from the screenshot capture state machine
///
/// When both capture strategies fail, `Session` carries the full-page
/// attempt's error; the fallback error is logged and suppressed.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The overall capture deadline elapsed mid-attempt
    #[error("capture deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// Browser launch, navigation, readiness, or capture failure
    #[error(transparent)]
    Session(#[from] anyhow::Error),
}

/// Errors from link extraction
///
/// Per-anchor problems never surface here; a bad anchor is skipped. Only a
/// body that cannot be interpreted as text at all fails the extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The page body is not text
    #[error("page body is not valid UTF-8 text: {0}")]
    NonTextBody(#[from] std::str::Utf8Error),
}

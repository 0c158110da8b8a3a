//! URL validation and normalization.
//!
//! This module turns untrusted user-supplied URL strings into validated
//! absolute URLs and classifies resolved link targets.

use url::Url;

use crate::errors::ScrapeError;

/// Normalize a raw URL string into a validated absolute URL.
///
/// Users routinely paste bare hostnames ("example.com/docs"), so input
/// without a scheme separator gets an `https://` prefix before parsing.
/// Anything that still fails strict absolute-URL parsing is rejected, as is
/// any scheme other than http/https.
///
/// Pure and deterministic; no I/O.
pub fn normalize_url(raw: &str) -> Result<Url, ScrapeError> {
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let url = Url::parse(&candidate).map_err(|source| ScrapeError::InvalidUrl {
        input: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScrapeError::UnsupportedScheme(url.scheme().to_string()));
    }

    Ok(url)
}

/// Whether a resolved absolute URL string is a navigational link target.
///
/// `mailto:` and `javascript:` anchors trigger client-side behavior rather
/// than navigation. Case-sensitive prefix match on the resolved string.
#[must_use]
pub fn is_navigational(absolute: &str) -> bool {
    !(absolute.starts_with("mailto:") || absolute.starts_with("javascript:"))
}

//! Link resolution and deduplication
//!
//! Extracts every anchor target from a fetched page, resolves it against
//! the page's own URL, and returns the unique absolute forms in document
//! order.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Selector};
use url::Url;

use crate::errors::ExtractionError;
use crate::utils::is_navigational;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector 'a[href]' is invalid")
});

/// Extract the deduplicated absolute link targets of a page.
///
/// The body is parsed with browser-grade error recovery, so malformed or
/// truncated markup still yields whatever anchors are recognizable. A
/// single bad `href` never fails the extraction; it is skipped and the
/// remaining anchors are processed. The only hard failure is a body that
/// cannot be interpreted as text at all.
///
/// Deduplication is by exact string identity of the resolved absolute URL.
/// No canonicalization is applied beyond the resolution itself: trailing
/// slashes, query order, and percent-encoding case all distinguish links.
/// First occurrence determines position in the output.
pub fn extract_links(base: &Url, body: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let text = std::str::from_utf8(body)?;
    let document = Html::parse_document(text);

    let mut seen: HashSet<String> = HashSet::new();
    let mut links: Vec<String> = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() {
            continue;
        }

        // A leading ':' means an empty scheme; reject the reference as
        // unparseable instead of letting join() fold it into the path.
        if href.starts_with(':') {
            continue;
        }
        let Ok(resolved) = base.join(href) else {
            continue;
        };

        let absolute = String::from(resolved);
        if !is_navigational(&absolute) {
            continue;
        }

        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }

    debug!("Extracted {} unique links from {base}", links.len());
    Ok(links)
}

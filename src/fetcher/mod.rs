//! Bounded single-page HTML fetch
//!
//! Streams the response body so the byte cap holds even when a server lies
//! about Content-Length or streams indefinitely.

use std::time::{Duration, Instant};

use futures_util::StreamExt;
use log::info;
use reqwest::StatusCode;
use url::Url;

use crate::errors::FetchError;
use crate::utils::FETCH_USER_AGENT;

/// A fetched page body plus the status it arrived with.
///
/// A non-2xx status is not a fetch failure; callers decide how loudly to
/// complain while still processing the body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: Vec<u8>,
    pub status: StatusCode,
}

/// Fetch `url` with an overall deadline and a hard body-size cap.
///
/// Redirects are followed; the returned status is the final one.
pub async fn fetch_html(
    url: &Url,
    timeout: Duration,
    max_bytes: usize,
) -> Result<FetchedPage, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(FETCH_USER_AGENT)
        .timeout(timeout)
        .build()?;

    let start = Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify(e, timeout))?;
    let status = response.status();

    let mut body: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| classify(e, timeout))?;
        if body.len() + chunk.len() > max_bytes {
            return Err(FetchError::BodyTooLarge { limit: max_bytes });
        }
        body.extend_from_slice(&chunk);
    }

    info!(
        "HTTP {} - fetched {} bytes in {:?}",
        status.as_u16(),
        body.len(),
        start.elapsed()
    );
    Ok(FetchedPage { body, status })
}

fn classify(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Transport(err)
    }
}

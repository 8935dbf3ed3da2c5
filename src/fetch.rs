//! Listing page fetcher.
//!
//! The source site rejects requests that do not look like a desktop browser,
//! so every GET carries a fixed browser header set. Fetching is deliberately
//! forgiving: any transport failure or non-2xx status is reported as `None`
//! rather than an error, and the pagination driver treats such a page the
//! same as "no more pages." A single bad page must never abort a crawl.

use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA, USER_AGENT,
};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, warn};

/// Total per-request timeout, connection and body included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Source of listing page HTML.
///
/// The crawl driver only ever sees this trait, which is what lets the
/// pagination tests run against canned pages instead of the network.
#[async_trait]
pub trait PageFetcher {
    /// Fetch one URL. `Some(body)` only for a 2xx response; `None` for any
    /// non-success status or transport failure.
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Real HTTP fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build the fetcher with the fixed timeout and browser header set.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/123 Safari/537.36",
            ),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en,en-US;q=0.9"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(%url, error = %e, "Page fetch failed; treating as unavailable");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Non-success status; treating page as unavailable");
            return None;
        }

        match response.text().await {
            Ok(body) => {
                debug!(%url, bytes = body.len(), "Fetched listing page");
                Some(body)
            }
            Err(e) => {
                warn!(%url, error = %e, "Failed reading response body; treating as unavailable");
                None
            }
        }
    }
}

//! Page fetch adapter: URL in, document snapshot material out.
//!
//! Everything network-flavored lives here; the extractors never do I/O.

use std::time::Duration;

use chrono::Utc;
use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::extract::scrape_document;
use crate::types::{ConferenceInfo, FetchedPage};

/// Fetches conference pages over HTTP.
///
/// One GET per call, redirects followed, no retry. Failures surface as
/// [`ScrapeError::DocumentUnavailable`].
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        // Browser-like User-Agent to avoid bot detection
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                .parse()
                .unwrap(),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            "en-US,en;q=0.5".parse().unwrap(),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Fetch a page, following redirects.
    ///
    /// The returned page carries the final URL after redirects and a UTC
    /// fetch timestamp. Any transport failure or non-2xx status makes the
    /// document unavailable.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let url = normalize_url(url);
        let parsed = Url::parse(&url).map_err(|_| ScrapeError::InvalidUrl { url: url.clone() })?;

        debug!(url = %url, "Fetching page");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            ScrapeError::DocumentUnavailable {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::DocumentUnavailable {
                url: url.clone(),
                reason: format!("HTTP {}", status),
            });
        }

        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| ScrapeError::DocumentUnavailable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        debug!(url = %final_url, bytes = html.len(), "Page fetched");

        Ok(FetchedPage {
            url: final_url,
            html,
            fetched_at: Utc::now(),
        })
    }

    /// Fetch a page and extract its conference record in one round trip.
    pub async fn scrape(&self, url: &str) -> Result<ConferenceInfo> {
        let page = self.fetch(url).await?;
        let document = Html::parse_document(&page.html);
        Ok(scrape_document(&document, &page.url))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Add `https://` when no scheme is present.
fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

//! Error taxonomy for the scraping pipeline.
//!
//! Errors are only ever fatal at the boundary where they occur: the source
//! scraper and the detail fetcher catch them and degrade to an empty list or
//! `None`, and the orchestrator catches per-candidate failures so one bad
//! article never aborts a run.

use thiserror::Error;

/// Errors produced by the fetch, persistence, and orchestration layers.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure (DNS, connection refused, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded its per-request timeout and was aborted.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// A non-2xx, non-3xx response status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The redirect chain exceeded the hop cap; fails closed on loops.
    #[error("too many redirects while fetching {url}")]
    TooManyRedirects { url: String },

    /// The URL (or a redirect target) could not be parsed.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The shared HTTP client could not be constructed.
    #[error("could not build http client: {0}")]
    Client(reqwest::Error),

    /// The persistence layer rejected a lookup or insert.
    #[error("storage error: {0}")]
    Storage(String),

    /// Another `run` of the same pipeline is still in progress.
    #[error("a scrape run is already in progress")]
    AlreadyRunning,
}

impl ScrapeError {
    /// Map a reqwest error for `url` into the taxonomy, distinguishing
    /// timeouts from other transport failures.
    pub(crate) fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScrapeError::Timeout { url: url.to_string() }
        } else {
            ScrapeError::Network {
                url: url.to_string(),
                source: e,
            }
        }
    }
}

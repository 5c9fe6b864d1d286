//! Page fetching with browser-like headers and manual redirect handling.
//!
//! Source sites are ordinary news CMSes that sometimes block obvious bots,
//! so the shared client sends a realistic desktop header set. Redirects are
//! followed by hand rather than by reqwest's policy so that relative
//! `Location` targets are resolved against the current URL and the chain is
//! capped at [`MAX_REDIRECTS`] hops: a redirect loop fails closed instead
//! of recursing forever.

use crate::error::ScrapeError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, LOCATION, USER_AGENT};
use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Default timeout for list-page fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum redirect hops before failing closed.
pub const MAX_REDIRECTS: usize = 5;

const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the shared HTTP client used by every stage of the pipeline.
///
/// Redirect handling is disabled at the client level; [`fetch_url`] and the
/// image downloader follow `Location` headers themselves.
pub fn build_client() -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(UA));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("tr-TR,tr;q=0.9,en;q=0.8"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    Client::builder()
        .default_headers(headers)
        .redirect(redirect::Policy::none())
        .build()
        .map_err(ScrapeError::Client)
}

/// Fetch `url` and return the response body as text.
///
/// Follows up to [`MAX_REDIRECTS`] redirect hops, resolving relative
/// `Location` values against the URL that issued them. Any non-2xx,
/// non-3xx status is an error; a request exceeding `timeout` rejects with
/// [`ScrapeError::Timeout`] and the in-flight request is dropped.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_url(client: &Client, url: &str, timeout: Duration) -> Result<String, ScrapeError> {
    let mut current = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    for hop in 0..=MAX_REDIRECTS {
        let response = client
            .get(current.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ScrapeError::from_reqwest(current.as_str(), e))?;

        let status = response.status();
        if status.is_redirection() {
            current = redirect_target(&current, status, response.headers().get(LOCATION))?;
            debug!(hop, target = %current, "Following redirect");
            continue;
        }
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: current.to_string(),
                status: status.as_u16(),
            });
        }
        return response
            .text()
            .await
            .map_err(|e| ScrapeError::from_reqwest(current.as_str(), e));
    }

    Err(ScrapeError::TooManyRedirects { url: url.to_string() })
}

/// Resolve a redirect `Location` header against the URL that issued it.
pub(crate) fn redirect_target(
    current: &Url,
    status: StatusCode,
    location: Option<&HeaderValue>,
) -> Result<Url, ScrapeError> {
    let location = location
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ScrapeError::HttpStatus {
            url: current.to_string(),
            status: status.as_u16(),
        })?;
    current.join(location).map_err(|e| ScrapeError::InvalidUrl {
        url: location.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_redirect_target_relative_path() {
        let current = Url::parse("https://example.com/haberler/liste").unwrap();
        let value = HeaderValue::from_static("/haber/yeni");
        let target = redirect_target(&current, StatusCode::MOVED_PERMANENTLY, Some(&value)).unwrap();
        assert_eq!(target.as_str(), "https://example.com/haber/yeni");
    }

    #[test]
    fn test_redirect_target_absolute() {
        let current = Url::parse("https://example.com/a").unwrap();
        let value = HeaderValue::from_static("https://cdn.example.net/b");
        let target = redirect_target(&current, StatusCode::FOUND, Some(&value)).unwrap();
        assert_eq!(target.as_str(), "https://cdn.example.net/b");
    }

    #[test]
    fn test_redirect_without_location_is_http_error() {
        let current = Url::parse("https://example.com/a").unwrap();
        let err = redirect_target(&current, StatusCode::MOVED_PERMANENTLY, None).unwrap_err();
        assert!(matches!(err, ScrapeError::HttpStatus { status: 301, .. }));
    }
}

//! Lead-image download with stream-to-disk and graceful failure.
//!
//! A missing image is never worth losing an article over, so every failure
//! path here resolves to `None` and a log line. Partial files are removed
//! whenever a download aborts mid-stream so the uploads directory only ever
//! holds complete images.

use crate::fetch::{redirect_target, MAX_REDIRECTS};
use futures::StreamExt;
use reqwest::header::LOCATION;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Public URL prefix under which stored articles reference their images.
pub const PUBLIC_IMAGE_PREFIX: &str = "/uploads/news";

const IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Download `url` into `uploads_dir/filename`.
///
/// Returns the public-facing path (`/uploads/news/<filename>`) on success,
/// `None` on any failure. Follows redirects with the same hop cap as page
/// fetches. Non-HTTP(S) URLs are rejected up front; the uploads directory
/// is created lazily.
#[instrument(level = "debug", skip(client, uploads_dir))]
pub async fn download_image(client: &Client, url: &str, uploads_dir: &Path, filename: &str) -> Option<String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        debug!(%url, "Skipping image with non-http URL");
        return None;
    }
    if let Err(e) = fs::create_dir_all(uploads_dir).await {
        warn!(path = %uploads_dir.display(), error = %e, "Could not create uploads directory");
        return None;
    }

    let mut current = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            debug!(%url, error = %e, "Unparseable image URL");
            return None;
        }
    };

    for _hop in 0..=MAX_REDIRECTS {
        let response = match client.get(current.clone()).timeout(IMAGE_TIMEOUT).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(url = %current, error = %e, "Image request failed");
                return None;
            }
        };

        let status = response.status();
        if status.is_redirection() {
            match redirect_target(&current, status, response.headers().get(LOCATION)) {
                Ok(target) => {
                    current = target;
                    continue;
                }
                Err(e) => {
                    warn!(url = %current, error = %e, "Bad image redirect");
                    return None;
                }
            }
        }
        if !status.is_success() {
            warn!(url = %current, status = status.as_u16(), "Image fetch returned error status");
            return None;
        }

        return save_body(response, uploads_dir, filename).await;
    }

    warn!(%url, "Too many redirects while downloading image");
    None
}

/// Stream a successful response body into the destination file.
async fn save_body(response: reqwest::Response, uploads_dir: &Path, filename: &str) -> Option<String> {
    let dest = uploads_dir.join(filename);
    let mut file = match fs::File::create(&dest).await {
        Ok(f) => f,
        Err(e) => {
            warn!(path = %dest.display(), error = %e, "Could not open image file for writing");
            return None;
        }
    };

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let write_result = match chunk {
            Ok(bytes) => file.write_all(&bytes).await,
            Err(e) => {
                warn!(path = %dest.display(), error = %e, "Image body stream failed");
                drop(file);
                let _ = fs::remove_file(&dest).await;
                return None;
            }
        };
        if let Err(e) = write_result {
            warn!(path = %dest.display(), error = %e, "Writing image to disk failed");
            drop(file);
            let _ = fs::remove_file(&dest).await;
            return None;
        }
    }
    if let Err(e) = file.flush().await {
        warn!(path = %dest.display(), error = %e, "Flushing image file failed");
        let _ = fs::remove_file(&dest).await;
        return None;
    }

    info!(path = %dest.display(), "Saved article image");
    Some(format!("{}/{}", PUBLIC_IMAGE_PREFIX, filename))
}

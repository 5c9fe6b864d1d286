//! Pipeline orchestration: fetch → parse → dedupe → persist → fallback.
//!
//! Sources are scraped one after another and candidates are persisted one
//! after another, on purpose: it keeps request rates to the source sites
//! low and makes the dedupe check (read-then-insert against the store)
//! race-free within a run. A process-wide run flag rejects overlapping
//! invocations: a cron tick and an admin refresh must not interleave
//! their check-then-insert windows.

use crate::error::ScrapeError;
use crate::images::download_image;
use crate::models::{Candidate, NewsSource, StoredArticle};
use crate::samples::fallback_articles;
use crate::scrapers::content::scrape_content;
use crate::scrapers::scrape_source;
use crate::store::ArticleStore;
use crate::utils::{create_slug, truncate_for_log};
use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::{rng, Rng};
use reqwest::Client;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, instrument, warn};

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct ScrapeSummary {
    /// How many new articles were persisted (scraped or fallback).
    pub count: usize,
    /// Operator-facing summary line, surfaced in the admin panel.
    pub message: String,
}

/// The scraping pipeline. Construct once, run per scheduler tick.
pub struct Pipeline {
    client: Client,
    sources: Vec<NewsSource>,
    uploads_dir: PathBuf,
    running: AtomicBool,
}

impl Pipeline {
    /// Build a pipeline over the given sources, saving images under
    /// `uploads_dir`.
    pub fn new(sources: Vec<NewsSource>, uploads_dir: impl Into<PathBuf>) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: crate::fetch::build_client()?,
            sources,
            uploads_dir: uploads_dir.into(),
            running: AtomicBool::new(false),
        })
    }

    /// Run the full pipeline once against `store`.
    ///
    /// Per-candidate failures are logged and skipped; the run itself only
    /// fails on [`ScrapeError::AlreadyRunning`]. If nothing new was
    /// persisted, the hardcoded sample set is inserted instead.
    #[instrument(level = "info", skip_all)]
    pub async fn run(&self, store: &dyn ArticleStore) -> Result<ScrapeSummary, ScrapeError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Rejecting overlapping scrape invocation");
            return Err(ScrapeError::AlreadyRunning);
        }
        let result = self.run_inner(store).await;
        self.running.store(false, Ordering::SeqCst);
        result
    }

    async fn run_inner(&self, store: &dyn ArticleStore) -> Result<ScrapeSummary, ScrapeError> {
        let started = std::time::Instant::now();

        let mut candidates: Vec<Candidate> = Vec::new();
        for source in &self.sources {
            let found = scrape_source(&self.client, source).await;
            info!(source = %source.name, count = found.len(), "Source scraped");
            candidates.extend(found);
        }
        info!(total = candidates.len(), "Collected candidates from all sources");

        let mut count = 0usize;
        for candidate in &candidates {
            match self.import_candidate(store, candidate).await {
                Ok(true) => {
                    count += 1;
                    info!(
                        title = %truncate_for_log(&candidate.title, 60),
                        source = %candidate.source,
                        "Stored new article"
                    );
                }
                Ok(false) => {
                    info!(
                        title = %truncate_for_log(&candidate.title, 60),
                        "Duplicate title; skipping"
                    );
                }
                Err(e) => {
                    warn!(
                        title = %truncate_for_log(&candidate.title, 60),
                        error = %e,
                        "Failed to import candidate; continuing"
                    );
                }
            }
        }

        let message = if count == 0 {
            let inserted = self.insert_fallback_samples(store).await;
            count = inserted;
            format!("Canlı kaynaklardan yeni haber alınamadı; {inserted} örnek haber eklendi")
        } else {
            format!("{count} yeni haber eklendi")
        };

        info!(count, elapsed = ?started.elapsed(), "Scrape run finished");
        Ok(ScrapeSummary { count, message })
    }

    /// Import one candidate. `Ok(false)` means the title already exists.
    async fn import_candidate(&self, store: &dyn ArticleStore, candidate: &Candidate) -> Result<bool, ScrapeError> {
        if store.find_by_title(&candidate.title).await?.is_some() {
            return Ok(false);
        }

        let content = match &candidate.link {
            Some(link) => scrape_content(&self.client, link).await,
            None => None,
        };
        let content = content.unwrap_or_else(|| synthesize_body(candidate));

        let image = match &candidate.image {
            Some(url) => {
                let filename = image_filename();
                download_image(&self.client, url, &self.uploads_dir, &filename).await
            }
            None => None,
        };

        let now = Utc::now();
        let slug = format!("{}-{}", create_slug(&candidate.title), now.timestamp_millis());

        store
            .insert(StoredArticle {
                title: candidate.title.clone(),
                slug,
                excerpt: candidate.excerpt.clone(),
                content,
                image,
                is_active: true,
                is_featured: false,
                created_at: now,
            })
            .await?;
        Ok(true)
    }

    /// Insert the hardcoded sample set, skipping titles that already exist.
    async fn insert_fallback_samples(&self, store: &dyn ArticleStore) -> usize {
        info!("No new articles persisted; falling back to sample content");
        let mut inserted = 0usize;
        for sample in fallback_articles() {
            match store.find_by_title(sample.title).await {
                Ok(Some(_)) => continue,
                Ok(None) => {}
                Err(e) => {
                    warn!(title = sample.title, error = %e, "Sample lookup failed; skipping");
                    continue;
                }
            }
            let now = Utc::now();
            let article = StoredArticle {
                title: sample.title.to_string(),
                slug: format!("{}-{}", create_slug(sample.title), now.timestamp_millis()),
                excerpt: sample.excerpt.to_string(),
                content: sample.content.to_string(),
                image: None,
                is_active: true,
                is_featured: true,
                created_at: now,
            };
            match store.insert(article).await {
                Ok(()) => inserted += 1,
                Err(e) => warn!(title = sample.title, error = %e, "Sample insert failed; skipping"),
            }
        }
        info!(inserted, "Fallback sample insertion finished");
        inserted
    }
}

/// Minimal HTML body for a candidate whose article content could not be
/// fetched: excerpt, source attribution, and a read-more link if any.
fn synthesize_body(candidate: &Candidate) -> String {
    let mut body = format!(
        "<p>{}</p>\n<p><em>Kaynak: {}</em></p>",
        candidate.excerpt, candidate.source
    );
    if let Some(link) = &candidate.link {
        body.push_str(&format!(
            "\n<p><a href=\"{link}\" target=\"_blank\" rel=\"noopener\">Haberin devamını okuyun</a></p>"
        ));
    }
    body
}

/// Randomized image filename: `haber-<millis>-<random9>.jpg`.
fn image_filename() -> String {
    let suffix: String = rng()
        .sample_iter(Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("haber-{}-{}.jpg", Utc::now().timestamp_millis(), suffix.to_lowercase())
}

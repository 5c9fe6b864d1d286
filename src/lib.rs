//! # KYSD News
//!
//! Sector-news scraping and import pipeline for the KYSD association site.
//! Fetches list pages from the configured news sources, extracts article
//! summaries with per-field CSS-selector fallbacks, pulls each article's
//! main content, downloads lead images, and appends deduplicated records to
//! an [`ArticleStore`](store::ArticleStore).
//!
//! ## Pipeline
//!
//! 1. **Fetch**: list pages with browser-like headers, manual redirect
//!    following (capped at 5 hops), per-request timeouts
//! 2. **Extract**: up to 10 candidates per source; fetch or parse failures
//!    degrade to an empty list so other sources still run
//! 3. **Enrich**: best-effort article content extraction, lead-image
//!    download to the uploads directory
//! 4. **Persist**: exact-title dedupe, slug + timestamp key, append-only
//!    insert; if a run yields nothing new, a fixed sample set is inserted
//!    so the news section never goes silent
//!
//! Sources run sequentially and candidates persist sequentially, so
//! request rates to external sites stay low and the dedupe check is race-free
//! within a run. Overlapping runs of one [`Pipeline`](pipeline::Pipeline)
//! are rejected outright.
//!
//! ## Usage
//!
//! ```no_run
//! use kysd_news::pipeline::Pipeline;
//! use kysd_news::sources::default_sources;
//! use kysd_news::store::MemoryStore;
//!
//! # async fn run() -> Result<(), kysd_news::error::ScrapeError> {
//! let pipeline = Pipeline::new(default_sources(), "uploads/news")?;
//! let store = MemoryStore::new();
//! let summary = pipeline.run(&store).await?;
//! println!("{}", summary.message);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod fetch;
pub mod images;
pub mod models;
pub mod pipeline;
pub mod samples;
pub mod scrapers;
pub mod sources;
pub mod store;
pub mod utils;

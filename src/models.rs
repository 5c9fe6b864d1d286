//! Data models for the scraping pipeline.
//!
//! Three kinds of data flow through the pipeline:
//! - [`NewsSource`] / [`SourceSelectors`]: static source configuration,
//!   built once at startup (or injected by tests) and never persisted
//! - [`Candidate`]: an ephemeral article summary extracted from a source's
//!   list page, consumed by the orchestrator and never stored directly
//! - [`StoredArticle`]: the persisted record handed to the article store;
//!   once inserted it is never updated or deleted by this pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured external news source.
///
/// # Fields
///
/// * `name` - Display name, also used for source attribution in synthesized
///   article bodies
/// * `list_url` - The page listing recent articles
/// * `base_url` - Prefix used to resolve relative links found on the list page
/// * `selectors` - CSS selectors for locating article fields
#[derive(Debug, Clone)]
pub struct NewsSource {
    pub name: String,
    pub list_url: String,
    pub base_url: String,
    pub selectors: SourceSelectors,
}

/// CSS selectors for one source's list page.
///
/// `items` locates the repeated article elements. The per-field lists are
/// ordered fallbacks, tried in sequence until one yields a usable value;
/// source markup varies enough that a single selector per field is too
/// brittle.
#[derive(Debug, Clone)]
pub struct SourceSelectors {
    /// Selector for the repeated list-item elements.
    pub items: String,
    /// Fallbacks for the article title; first non-empty text wins.
    pub title: Vec<String>,
    /// Fallbacks for the article link (`href` of the first matching anchor).
    pub link: Vec<String>,
    /// Fallbacks for the lead image (`src`, then `data-src`).
    pub image: Vec<String>,
    /// Fallbacks for the excerpt text; the title stands in if none match.
    pub excerpt: Vec<String>,
}

/// An in-memory, not-yet-persisted article summary from a list page.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Title, trimmed and truncated to 200 characters.
    pub title: String,
    /// Absolute link to the article page, when one was found.
    pub link: Option<String>,
    /// Absolute URL of the lead image, when one was found.
    pub image: Option<String>,
    /// Excerpt, truncated to 300 characters.
    pub excerpt: String,
    /// Name of the source this candidate came from.
    pub source: String,
}

/// A persisted article as handed to the [`ArticleStore`](crate::store::ArticleStore).
///
/// `title` is the dedupe key: the pipeline never inserts two articles with
/// an identical title string. `slug` carries a timestamp suffix appended by
/// the orchestrator, so it is unique per run without coordination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredArticle {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// HTML fragment: either extracted article content or a synthesized
    /// excerpt/attribution body.
    pub content: String,
    /// Public path of the downloaded lead image, or `None`.
    pub image: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

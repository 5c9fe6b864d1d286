//! Persistence seam for the pipeline.
//!
//! The site's real persistence layer is an ORM owned by the web application;
//! the pipeline only needs an exact-title lookup and an append. Anything
//! implementing [`ArticleStore`] will do: the binary uses the JSON-file
//! backend, tests use the in-memory one.

use crate::error::ScrapeError;
use crate::models::StoredArticle;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Minimal persistence contract: exact-title lookup and append.
///
/// The pipeline is append-only: it never updates or deletes rows.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Find a stored article whose title exactly equals `title`.
    async fn find_by_title(&self, title: &str) -> Result<Option<StoredArticle>, ScrapeError>;

    /// Append a new article.
    async fn insert(&self, article: StoredArticle) -> Result<(), ScrapeError>;
}

/// In-memory store, used by tests and as a scratch target.
#[derive(Default)]
pub struct MemoryStore {
    articles: RwLock<Vec<StoredArticle>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, handy for dedupe tests.
    pub fn with_articles(articles: Vec<StoredArticle>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }

    /// Snapshot of everything stored so far.
    pub async fn all(&self) -> Vec<StoredArticle> {
        self.articles.read().await.clone()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn find_by_title(&self, title: &str) -> Result<Option<StoredArticle>, ScrapeError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|a| a.title == title)
            .cloned())
    }

    async fn insert(&self, article: StoredArticle) -> Result<(), ScrapeError> {
        self.articles.write().await.push(article);
        Ok(())
    }
}

/// JSON-file-backed store used by the runner binary.
///
/// The whole article list is kept in memory and rewritten to disk after each
/// insert. Fine at this scale; the file doubles as a human-inspectable
/// import log.
pub struct JsonFileStore {
    path: PathBuf,
    articles: RwLock<Vec<StoredArticle>>,
}

impl JsonFileStore {
    /// Open (or start) the store at `path`, loading any existing records.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let path = path.as_ref().to_path_buf();
        let articles = match fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str::<Vec<StoredArticle>>(&raw)
                .map_err(|e| ScrapeError::Storage(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file absent; starting empty");
                Vec::new()
            }
            Err(e) => return Err(ScrapeError::Storage(format!("{}: {}", path.display(), e))),
        };
        info!(path = %path.display(), count = articles.len(), "Opened article store");
        Ok(Self {
            path,
            articles: RwLock::new(articles),
        })
    }

    async fn persist(&self, articles: &[StoredArticle]) -> Result<(), ScrapeError> {
        let json = serde_json::to_string_pretty(articles)
            .map_err(|e| ScrapeError::Storage(e.to_string()))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| ScrapeError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl ArticleStore for JsonFileStore {
    async fn find_by_title(&self, title: &str) -> Result<Option<StoredArticle>, ScrapeError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|a| a.title == title)
            .cloned())
    }

    async fn insert(&self, article: StoredArticle) -> Result<(), ScrapeError> {
        let mut articles = self.articles.write().await;
        articles.push(article);
        self.persist(&articles).await
    }
}

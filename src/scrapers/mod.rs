//! Per-source list-page scraping.
//!
//! Each configured [`NewsSource`] is scraped independently: a fetch or parse
//! failure for one source yields an empty candidate list and a log line,
//! never an error, so the remaining sources still run.
//!
//! Extraction is split from fetching: [`extract_candidates`] works on an
//! already-fetched HTML string so it can be exercised directly in tests.

pub mod content;

use crate::fetch::{fetch_url, DEFAULT_TIMEOUT};
use crate::models::{Candidate, NewsSource};
use crate::utils::truncate_chars;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, instrument, warn};

/// Fixed safety bound on candidates per source (first N in document order).
pub const MAX_ITEMS_PER_SOURCE: usize = 10;

/// Titles shorter than this are decorative fragments, not articles.
const MIN_TITLE_CHARS: usize = 10;

const MAX_TITLE_CHARS: usize = 200;
const MAX_EXCERPT_CHARS: usize = 300;

/// Scrape one source's list page into at most [`MAX_ITEMS_PER_SOURCE`]
/// candidates. Never fails: any fetch error degrades to an empty list.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn scrape_source(client: &Client, source: &NewsSource) -> Vec<Candidate> {
    let html = match fetch_url(client, &source.list_url, DEFAULT_TIMEOUT).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url = %source.list_url, error = %e, "List page fetch failed; skipping source");
            return Vec::new();
        }
    };
    let candidates = extract_candidates(&html, source);
    info!(count = candidates.len(), "Extracted candidates from list page");
    candidates
}

/// Extract candidates from a fetched list-page document.
pub fn extract_candidates(html: &str, source: &NewsSource) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let items = match Selector::parse(&source.selectors.items) {
        Ok(sel) => sel,
        Err(e) => {
            warn!(selector = %source.selectors.items, error = %e, "Invalid items selector");
            return Vec::new();
        }
    };

    document
        .select(&items)
        .take(MAX_ITEMS_PER_SOURCE)
        .filter_map(|item| extract_candidate(item, source))
        .collect()
}

/// Extract a single candidate; `None` skips the item silently.
fn extract_candidate(item: ElementRef<'_>, source: &NewsSource) -> Option<Candidate> {
    let title = first_text(item, &source.selectors.title)?;
    if title.chars().count() < MIN_TITLE_CHARS {
        return None;
    }

    let link = first_attr(item, &source.selectors.link, &["href"])
        .map(|href| resolve_link(&href, &source.base_url));
    let image = first_attr(item, &source.selectors.image, &["src", "data-src"])
        .map(|src| resolve_link(&src, &source.base_url));
    let excerpt = first_text(item, &source.selectors.excerpt).unwrap_or_else(|| title.clone());

    Some(Candidate {
        title: truncate_chars(&title, MAX_TITLE_CHARS),
        link,
        image,
        excerpt: truncate_chars(&excerpt, MAX_EXCERPT_CHARS),
        source: source.name.clone(),
    })
}

/// First non-empty trimmed text among the fallback selectors, in order.
fn first_text(item: ElementRef<'_>, selectors: &[String]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            warn!(selector = %raw, "Invalid text selector; trying next fallback");
            continue;
        };
        for element in item.select(&selector) {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// First present, non-empty attribute (tried in `attrs` order) of the first
/// element matching each fallback selector.
fn first_attr(item: ElementRef<'_>, selectors: &[String], attrs: &[&str]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            warn!(selector = %raw, "Invalid attribute selector; trying next fallback");
            continue;
        };
        if let Some(element) = item.select(&selector).next() {
            for attr in attrs {
                if let Some(value) = element.value().attr(attr) {
                    if !value.trim().is_empty() {
                        return Some(value.trim().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Resolve a possibly-relative link against the source base URL.
///
/// Deliberately naive prefix concatenation, not full URL resolution: the
/// configured base URLs have no trailing slash and list pages on these
/// sites link with absolute paths.
fn resolve_link(href: &str, base_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", base_url, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceSelectors;

    fn test_source() -> NewsSource {
        NewsSource {
            name: "Test Kaynak".into(),
            list_url: "https://example.com/haberler".into(),
            base_url: "https://example.com".into(),
            selectors: SourceSelectors {
                items: ".news-item".into(),
                title: vec!["h2".into(), ".title".into()],
                link: vec!["a".into()],
                image: vec!["img".into()],
                excerpt: vec![".excerpt".into(), "p".into()],
            },
        }
    }

    fn item(title: &str, href: &str, excerpt: &str) -> String {
        format!(
            r#"<div class="news-item"><h2>{title}</h2><a href="{href}">devamı</a><img src="/img/a.jpg"><p class="excerpt">{excerpt}</p></div>"#
        )
    }

    #[test]
    fn test_extracts_basic_candidate() {
        let html = item("Bodrum'da sezon erken açıldı", "/haber/1", "Sezon açılışı öne alındı.");
        let candidates = extract_candidates(&html, &test_source());
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.title, "Bodrum'da sezon erken açıldı");
        assert_eq!(c.link.as_deref(), Some("https://example.com/haber/1"));
        assert_eq!(c.image.as_deref(), Some("https://example.com/img/a.jpg"));
        assert_eq!(c.excerpt, "Sezon açılışı öne alındı.");
        assert_eq!(c.source, "Test Kaynak");
    }

    #[test]
    fn test_caps_at_ten_candidates() {
        let html: String = (0..25)
            .map(|i| item(&format!("Yeterince uzun başlık {i}"), "/h", "x"))
            .collect();
        let candidates = extract_candidates(&html, &test_source());
        assert_eq!(candidates.len(), MAX_ITEMS_PER_SOURCE);
    }

    #[test]
    fn test_discards_short_titles() {
        let html = format!("{}{}", item("Kısa", "/h1", "x"), item("Bu başlık yeterince uzun", "/h2", "x"));
        let candidates = extract_candidates(&html, &test_source());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Bu başlık yeterince uzun");
    }

    #[test]
    fn test_title_fallback_order() {
        let html = r#"<div class="news-item"><div class="title">İkincil seçiciden gelen başlık</div><a href="/h"></a></div>"#;
        let candidates = extract_candidates(html, &test_source());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "İkincil seçiciden gelen başlık");
    }

    #[test]
    fn test_excerpt_falls_back_to_title() {
        let html = r#"<div class="news-item"><h2>Özetinden yoksun bir haber başlığı</h2></div>"#;
        let candidates = extract_candidates(html, &test_source());
        assert_eq!(candidates[0].excerpt, candidates[0].title);
        assert!(candidates[0].link.is_none());
        assert!(candidates[0].image.is_none());
    }

    #[test]
    fn test_absolute_links_kept_as_is() {
        let html = item("Mutlak bağlantılı bir haber", "https://other.example.net/x", "x");
        let candidates = extract_candidates(&html, &test_source());
        assert_eq!(candidates[0].link.as_deref(), Some("https://other.example.net/x"));
    }

    #[test]
    fn test_truncates_title_and_excerpt() {
        let long_title = "b".repeat(400);
        let long_excerpt = "c".repeat(400);
        let html = item(&long_title, "/h", &long_excerpt);
        let candidates = extract_candidates(&html, &test_source());
        assert_eq!(candidates[0].title.chars().count(), 200);
        assert_eq!(candidates[0].excerpt.chars().count(), 300);
    }

    #[test]
    fn test_data_src_image_fallback() {
        let html = r#"<div class="news-item"><h2>Lazy-load görselli haber başlığı</h2><img data-src="/lazy.jpg"></div>"#;
        let candidates = extract_candidates(html, &test_source());
        assert_eq!(candidates[0].image.as_deref(), Some("https://example.com/lazy.jpg"));
    }

    #[test]
    fn test_no_matching_items_yields_empty() {
        let candidates = extract_candidates("<html><body><p>boş</p></body></html>", &test_source());
        assert!(candidates.is_empty());
    }
}

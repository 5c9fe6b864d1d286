//! Detail-page content extraction.
//!
//! Article pages across the configured sources share no common template, so
//! extraction tries an ordered list of container selectors and takes the
//! first whose cleaned HTML is substantial enough. When no container works,
//! long paragraphs are collected and re-wrapped as a last resort. Nothing
//! here ever fails the caller: the result is `Some(html)` or `None`.

use crate::error::ScrapeError;
use crate::fetch::fetch_url;
use reqwest::Client;
use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};
use std::fmt::Write as _;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Detail pages get a tighter timeout than list pages.
const CONTENT_TIMEOUT: Duration = Duration::from_secs(15);

/// A container must yield more than this many characters to be used.
const MIN_CONTENT_CHARS: usize = 100;

/// Paragraphs shorter than this are skipped by the fallback collector.
const MIN_PARAGRAPH_CHARS: usize = 50;

const MAX_FALLBACK_PARAGRAPHS: usize = 10;

/// Container selectors tried in order; most specific first.
const CONTAINER_SELECTORS: &[&str] = &[
    ".news-detail-content",
    ".haber-detay",
    ".detail-content",
    ".article-body",
    ".entry-content",
    ".post-content",
    ".news-content",
    "article .content",
    "article",
    ".content",
    "#content",
    "main",
];

/// Elements dropped wholesale while cleaning a container.
const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "form", "iframe", "noscript", "button",
];

/// Class-name fragments that mark social/share/related/ad blocks.
const NOISE_CLASS_HINTS: &[&str] = &[
    "share", "social", "related", "comment", "advert", "banner", "breadcrumb", "tags", "sidebar",
];

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "source", "embed", "input", "area", "col", "wbr"];

/// Fetch an article page and extract its main content fragment.
///
/// Returns `None` on any fetch failure or when nothing usable was found.
#[instrument(level = "debug", skip(client))]
pub async fn scrape_content(client: &Client, url: &str) -> Option<String> {
    let html = match fetch_url(client, url, CONTENT_TIMEOUT).await {
        Ok(html) => html,
        Err(e @ ScrapeError::Timeout { .. }) => {
            warn!(%url, error = %e, "Detail page timed out");
            return None;
        }
        Err(e) => {
            warn!(%url, error = %e, "Detail page fetch failed");
            return None;
        }
    };
    extract_content(&html)
}

/// Extract the main content fragment from a fetched article document.
pub fn extract_content(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for raw in CONTAINER_SELECTORS {
        let Ok(selector) = Selector::parse(raw) else { continue };
        if let Some(container) = document.select(&selector).next() {
            let cleaned = clean_container(container);
            if cleaned.chars().count() > MIN_CONTENT_CHARS {
                debug!(selector = raw, chars = cleaned.len(), "Using container content");
                return Some(cleaned);
            }
        }
    }

    paragraph_fallback(&document)
}

/// Serialize a container's children, dropping noise elements recursively.
fn clean_container(container: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in container.children() {
        clean_node(&mut out, child);
    }
    out.trim().to_string()
}

fn clean_node(out: &mut String, node: NodeRef<'_, Node>) {
    match node.value() {
        Node::Text(text) => out.push_str(&text),
        Node::Element(element) => {
            if is_noise(&element) {
                return;
            }
            let name = element.name();
            out.push('<');
            out.push_str(name);
            for (attr, value) in element.attrs() {
                let _ = write!(out, " {}=\"{}\"", attr, value.replace('"', "&quot;"));
            }
            out.push('>');
            if VOID_TAGS.contains(&name) {
                return;
            }
            for child in node.children() {
                clean_node(out, child);
            }
            let _ = write!(out, "</{}>", name);
        }
        _ => {}
    }
}

fn is_noise(element: &Element) -> bool {
    if NOISE_TAGS.contains(&element.name()) {
        return true;
    }
    element.classes().any(|class| {
        let class = class.to_ascii_lowercase();
        NOISE_CLASS_HINTS.iter().any(|hint| class.contains(hint))
    })
}

/// Last resort: collect long paragraphs under generic containers and
/// re-wrap them, keeping the first [`MAX_FALLBACK_PARAGRAPHS`].
fn paragraph_fallback(document: &Html) -> Option<String> {
    let selector = Selector::parse("article p, main p, .content p, #content p, body p").ok()?;

    let mut paragraphs = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>();
        let text = text.trim();
        if text.chars().count() > MIN_PARAGRAPH_CHARS {
            paragraphs.push(format!("<p>{}</p>", text));
            if paragraphs.len() == MAX_FALLBACK_PARAGRAPHS {
                break;
            }
        }
    }

    if paragraphs.is_empty() {
        debug!("No usable content found on detail page");
        None
    } else {
        debug!(count = paragraphs.len(), "Using paragraph fallback content");
        Some(paragraphs.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_SENTENCE: &str = "Turizm sektöründe bu yıl yaşanan gelişmeler, hem konaklama hem de seyahat acenteleri tarafında beklentilerin üzerinde bir hareketlilik yarattı.";

    #[test]
    fn test_container_content_extracted_and_noise_stripped() {
        let html = format!(
            r##"<html><body><div class="article-body">
                <p>{LONG_SENTENCE}</p>
                <script>alert(1)</script>
                <div class="share-buttons"><a href="#">paylaş</a></div>
                <p>{LONG_SENTENCE}</p>
            </div></body></html>"##
        );
        let content = extract_content(&html).unwrap();
        assert!(content.contains(LONG_SENTENCE));
        assert!(!content.contains("alert(1)"));
        assert!(!content.contains("paylaş"));
    }

    #[test]
    fn test_nested_noise_stripped() {
        let html = format!(
            r#"<div class="entry-content"><div><p>{LONG_SENTENCE}</p><nav><a>menü</a></nav></div></div>"#
        );
        let content = extract_content(&html).unwrap();
        assert!(content.contains(LONG_SENTENCE));
        assert!(!content.contains("menü"));
    }

    #[test]
    fn test_short_container_falls_through_to_paragraphs() {
        let html = format!(
            r#"<html><body><div class="article-body">kısa</div>
            <div><p>{LONG_SENTENCE}</p><p>kısa paragraf</p><p>{LONG_SENTENCE}</p></div></body></html>"#
        );
        let content = extract_content(&html).unwrap();
        assert!(content.starts_with("<p>"));
        assert_eq!(content.matches("<p>").count(), 2);
        assert!(!content.contains("kısa paragraf"));
    }

    #[test]
    fn test_paragraph_fallback_caps_at_ten() {
        let paragraphs: String = (0..20).map(|i| format!("<p>{LONG_SENTENCE} {i}</p>")).collect();
        let html = format!("<html><body><div>{paragraphs}</div></body></html>");
        let content = extract_content(&html).unwrap();
        assert_eq!(content.matches("<p>").count(), 10);
    }

    #[test]
    fn test_nothing_usable_yields_none() {
        assert!(extract_content("<html><body><p>kısa</p></body></html>").is_none());
        assert!(extract_content("").is_none());
    }

    #[test]
    fn test_void_elements_serialized() {
        let html = format!(
            r#"<div class="article-body"><p>{LONG_SENTENCE}</p><img src="/a.jpg"><p>{LONG_SENTENCE}</p></div>"#
        );
        let content = extract_content(&html).unwrap();
        assert!(content.contains(r#"<img src="/a.jpg">"#));
    }
}

//! String helpers: slug generation and log truncation.
//!
//! The slug builder is the one pure-function component of the pipeline. It
//! deliberately does NOT guarantee uniqueness: the orchestrator appends a
//! millisecond timestamp before using the result as a key.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

const MAX_SLUG_LEN: usize = 80;

/// Convert an article title to a URL-safe slug.
///
/// Transliterates the Turkish letters (ç, ğ, ı, ş, ö, ü and their uppercase
/// forms) to ASCII, lowercases, strips everything outside `[a-z0-9\s-]`,
/// collapses whitespace and hyphen runs to single hyphens, and truncates to
/// 80 characters with no leading or trailing hyphen.
///
/// The output always matches `^[a-z0-9-]{0,80}$` and the function is
/// idempotent on its own output.
///
/// # Examples
///
/// ```
/// use kysd_news::utils::create_slug;
/// assert_eq!(create_slug("Ayasofya Camii! 2024"), "ayasofya-camii-2024");
/// assert_eq!(create_slug("Kuşadası'nda Turizm Şöleni"), "kusadasinda-turizm-soleni");
/// ```
pub fn create_slug(title: &str) -> String {
    let transliterated: String = title
        .chars()
        .map(|c| match c {
            'ç' | 'Ç' => 'c',
            'ğ' | 'Ğ' => 'g',
            'ı' | 'İ' => 'i',
            'ş' | 'Ş' => 's',
            'ö' | 'Ö' => 'o',
            'ü' | 'Ü' => 'u',
            _ => c,
        })
        .collect();

    let lowered = transliterated.to_lowercase();
    let stripped = NON_SLUG.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");

    // Truncation can expose a trailing hyphen; trim again afterwards.
    let truncated: String = collapsed.chars().take(MAX_SLUG_LEN).collect();
    truncated.trim_matches('-').to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}…(+{} bytes)", head, s.len() - head.len())
    }
}

/// Truncate a string to at most `max` characters, without markers.
///
/// Used for the title (200) and excerpt (300) caps on extracted candidates.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file. The binary runs this
/// against the uploads directory before starting a scrape so permission
/// problems surface early rather than as per-image download failures.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Uploads directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_create_slug_turkish_transliteration() {
        assert_eq!(create_slug("Ayasofya Camii! 2024"), "ayasofya-camii-2024");
        assert_eq!(create_slug("Çırağan Sarayı"), "ciragan-sarayi");
        assert_eq!(create_slug("ŞÖĞÜÇİI"), "sogucii");
    }

    #[test]
    fn test_create_slug_shape() {
        let shape = Regex::new(r"^[a-z0-9-]{0,80}$").unwrap();
        let inputs = [
            "Ayasofya Camii! 2024",
            "   leading and trailing   ",
            "--- hyphens -- everywhere ---",
            "Türkiye'de %40 artış!!!",
            "",
            "!!!",
            "çok   uzun    boşluklar",
            &"uzun başlık ".repeat(30),
        ];
        for input in inputs {
            let slug = create_slug(input);
            assert!(shape.is_match(&slug), "bad slug {:?} from {:?}", slug, input);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[test]
    fn test_create_slug_idempotent() {
        for input in ["Ayasofya Camii! 2024", "Kuşadası'nda Şölen", "a-b-c"] {
            let once = create_slug(input);
            assert_eq!(create_slug(&once), once);
        }
    }

    #[test]
    fn test_create_slug_truncates_without_trailing_hyphen() {
        let long = "kelime ".repeat(40);
        let slug = create_slug(&long);
        assert!(slug.chars().count() <= 80);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("kısa", 100), "kısa");
    }
}

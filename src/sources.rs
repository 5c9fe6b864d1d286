//! Configured news sources.
//!
//! Selector lists were derived by inspecting each site's list-page markup.
//! The list is returned as owned value objects so the pipeline can be
//! constructed with any set of sources (tests inject mock-server sources).

use crate::models::{NewsSource, SourceSelectors};

/// The default sector-news sources scraped by the daily run.
pub fn default_sources() -> Vec<NewsSource> {
    vec![
        NewsSource {
            name: "Turizm Güncel".into(),
            list_url: "https://www.turizmguncel.com/gundem".into(),
            base_url: "https://www.turizmguncel.com".into(),
            selectors: SourceSelectors {
                items: "article, .news-item, .card".into(),
                title: vec!["h2".into(), "h3".into(), ".title".into(), ".card-title".into()],
                link: vec!["a[href]".into()],
                image: vec!["img".into()],
                excerpt: vec![".spot".into(), ".summary".into(), "p".into()],
            },
        },
        NewsSource {
            name: "Turizm Ajansı".into(),
            list_url: "https://www.turizmajansi.com/haberler".into(),
            base_url: "https://www.turizmajansi.com".into(),
            selectors: SourceSelectors {
                items: ".haber-listesi li, .news-list .item, article".into(),
                title: vec![".baslik".into(), "h2".into(), "h3".into(), "a".into()],
                link: vec!["a[href]".into()],
                image: vec!["img".into()],
                excerpt: vec![".ozet".into(), ".spot".into(), "p".into()],
            },
        },
        NewsSource {
            name: "Turizm Gazetesi".into(),
            list_url: "https://www.turizmgazetesi.com/haberler".into(),
            base_url: "https://www.turizmgazetesi.com".into(),
            selectors: SourceSelectors {
                items: ".news-row, .haber-kutu, article".into(),
                title: vec!["h2".into(), ".news-title".into(), "h3".into()],
                link: vec!["a[href]".into()],
                image: vec!["img".into()],
                excerpt: vec![".news-spot".into(), ".desc".into(), "p".into()],
            },
        },
    ]
}

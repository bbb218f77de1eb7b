//! HTML parser for extracting subpage links and image references
//!
//! Parsing is synchronous and finishes before any network call, so the
//! (non-`Send`) parsed document never lives across an await point.

use crate::url::{is_absolute_http, matches_domain_filter, normalize_image_src};
use scraper::{Html, Selector};

/// An image referenced by a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// The `src` attribute as written
    pub source: String,

    /// Absolute URL to fetch
    pub url: String,
}

/// Extracts same-site subpage links from anchor tags
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` whose href is an absolute `http`/`https`
/// URL containing `domain_filter` anywhere in its text.
///
/// **Exclude:** relative paths, fragment-only links, `mailto:`,
/// `javascript:` and other non-HTTP schemes, anchors without `href`.
///
/// Hrefs are returned verbatim, in document order, duplicates kept.
///
/// # Example
///
/// ```
/// use site_harvester::crawler::extract_links;
///
/// let html = r#"<a href="https://example.com/about">About</a><a href="/contact">Contact</a>"#;
/// assert_eq!(extract_links(html, "example.com"), vec!["https://example.com/about"]);
/// ```
pub fn extract_links(html: &str, domain_filter: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if is_absolute_http(href) && matches_domain_filter(href, domain_filter) {
                    links.push(href.to_string());
                }
            }
        }
    }

    links
}

/// Extracts image references from `<img>` tags
///
/// Sources are normalized (scheme-less references get `https:`). Images
/// without a `src` attribute, or with a blank one, are skipped. Order follows
/// the document and repeated sources are kept.
///
/// # Example
///
/// ```
/// use site_harvester::crawler::extract_images;
///
/// let images = extract_images(r#"<img src="//cdn.example.com/a.png"><img alt="none">"#);
/// assert_eq!(images.len(), 1);
/// assert_eq!(images[0].url, "https://cdn.example.com/a.png");
/// ```
pub fn extract_images(html: &str) -> Vec<ImageReference> {
    let document = Html::parse_document(html);
    let mut images = Vec::new();

    if let Ok(img_selector) = Selector::parse("img") {
        for element in document.select(&img_selector) {
            let Some(src) = element.value().attr("src") else {
                continue;
            };

            if let Some(url) = normalize_image_src(src) {
                images.push(ImageReference {
                    source: src.to_string(),
                    url,
                });
            }
        }
    }

    images
}

//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic document-level signals:
//! - Page title and meta description
//! - Heading counts
//! - Favicon, canonical link, and robots meta tag
//! - Document language

use url::Url;

use crate::dom::{element_text, Snapshot};

// CSS selector strings
const TITLE_SELECTOR: &str = "title";
const META_DESCRIPTION_SELECTOR: &str = "meta[name='description']";
const META_ROBOTS_SELECTOR: &str = "meta[name='robots']";
const FAVICON_SELECTOR: &str = "link[rel='icon'], link[rel='shortcut icon']";
const CANONICAL_SELECTOR: &str = "link[rel='canonical']";
const HTML_SELECTOR: &str = "html";

/// The canonical link as declared by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalLink {
    /// `href` resolved against the requested URL, or `None` if it could not be resolved
    pub resolved: Option<String>,
    /// Whether the resolved URL equals the final URL, ignoring one trailing slash
    pub matches_current: bool,
}

/// Extracts the page title from the first `<title>` element, trimmed.
///
/// # Returns
///
/// The title text, or `None` if the document has no `<title>` element.
pub fn extract_title(snapshot: &Snapshot) -> Option<String> {
    let title = snapshot
        .first_text(TITLE_SELECTOR)
        .map(|text| text.trim().to_string());
    if title.is_none() {
        log::debug!("No title element found in document");
    }
    title
}

/// Extracts the meta description from `<meta name="description">`, trimmed.
///
/// # Returns
///
/// The `content` attribute, or `None` if the tag or its `content` attribute is missing.
pub fn extract_meta_description(snapshot: &Snapshot) -> Option<String> {
    snapshot
        .first_attr(META_DESCRIPTION_SELECTOR, "content")
        .map(|content| content.trim().to_string())
}

/// Counts `<h1>` and `<h2>` elements.
pub fn count_headings(snapshot: &Snapshot) -> (usize, usize) {
    (snapshot.count("h1"), snapshot.count("h2"))
}

/// Text of every `<h1>` element, in document order.
pub fn h1_texts(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .select("h1")
        .iter()
        .map(|element| element_text(element))
        .collect()
}

/// Whether the page declares a favicon via `link[rel=icon]` or `link[rel="shortcut icon"]`.
pub fn has_favicon(snapshot: &Snapshot) -> bool {
    snapshot.exists(FAVICON_SELECTOR)
}

/// Extracts the `content` of `<meta name="robots">`.
pub fn extract_meta_robots(snapshot: &Snapshot) -> Option<String> {
    snapshot
        .first_attr(META_ROBOTS_SELECTOR, "content")
        .map(|content| content.trim().to_string())
}

/// Whether a robots directive string contains `noindex` (case-insensitive).
pub fn is_noindex(robots_content: &str) -> bool {
    robots_content.to_lowercase().contains("noindex")
}

/// Extracts the `lang` attribute of the root `<html>` element.
pub fn extract_lang(snapshot: &Snapshot) -> Option<String> {
    snapshot
        .first_attr(HTML_SELECTOR, "lang")
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
}

/// Extracts and evaluates the canonical link.
///
/// The `href` is resolved against `requested_url` and compared with
/// `final_url`; a single trailing slash on either side is ignored. An empty or
/// unresolvable `href` yields `resolved: None` and `matches_current: false`.
///
/// # Returns
///
/// `None` if the page has no `<link rel="canonical" href>`.
pub fn extract_canonical(
    snapshot: &Snapshot,
    requested_url: &Url,
    final_url: &Url,
) -> Option<CanonicalLink> {
    let href = snapshot.first_attr(CANONICAL_SELECTOR, "href")?;
    let href = href.trim();

    let resolved = if href.is_empty() {
        None
    } else {
        match requested_url.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                log::debug!("Failed to resolve canonical href '{}': {}", href, e);
                None
            }
        }
    };

    let matches_current = resolved
        .as_ref()
        .is_some_and(|url| urls_match_ignoring_trailing_slash(url.as_str(), final_url.as_str()));

    Some(CanonicalLink {
        resolved: resolved.map(|url| url.to_string()),
        matches_current,
    })
}

/// Compares two absolute URL strings, ignoring one trailing `/` on each.
pub(crate) fn urls_match_ignoring_trailing_slash(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('/').unwrap_or(a);
    let b = b.strip_suffix('/').unwrap_or(b);
    a == b
}

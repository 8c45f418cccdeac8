//! HTML parsing and on-page signal extraction.
//!
//! This module derives the structural signals of an audited page:
//! - Title, meta description, headings, canonical link, robots meta tag
//! - Image alt-text and format coverage
//! - Site identity keyword heuristic and body word count
//! - Social meta tags and analytics scripts
//! - Render-blocking resources, page size, DOM size
//! - Mobile-friendliness indicators
//!
//! Extraction is pure and synchronous. Absent data is reported as `None` or zero
//! here; the report assembler turns it into the documented defaults.

mod analytics;
mod content;
mod html;
mod images;
mod keywords;
mod mobile;
mod resources;
mod social;

use url::Url;

use crate::config::AnalyticsPatterns;
use crate::dom::Snapshot;

// Re-export public API
pub use analytics::detect_analytics;
pub use content::count_words;
pub use html::{
    count_headings, extract_canonical, extract_lang, extract_meta_description,
    extract_meta_robots, extract_title, h1_texts, has_favicon, is_noindex, CanonicalLink,
};
pub(crate) use html::urls_match_ignoring_trailing_slash;
pub use images::{extract_image_stats, ImageStats};
pub use keywords::{match_keywords, site_identity_token, KeywordSignals};
pub use mobile::{has_media_queries, has_viewport};
pub use resources::{count_render_blocking, RenderBlocking};
pub use social::{extract_social_signals, SocialSignals};

/// Everything the structural extractor derives from the DOM and raw HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralSignals {
    /// First `<title>` text, trimmed
    pub title: Option<String>,
    /// `meta[name=description]` content
    pub meta_description: Option<String>,
    /// Number of `<h1>` elements
    pub h1_count: usize,
    /// Number of `<h2>` elements
    pub h2_count: usize,
    /// Site identity keyword lookup
    pub keywords: KeywordSignals,
    /// Image counts
    pub images: ImageStats,
    /// Favicon link present
    pub favicon: bool,
    /// Canonical link, if declared
    pub canonical: Option<CanonicalLink>,
    /// `meta[name=robots]` content
    pub meta_robots: Option<String>,
    /// Social sharing tags
    pub social: SocialSignals,
    /// Render-blocking resources in `<head>`
    pub render_blocking: RenderBlocking,
    /// Raw HTML size in bytes
    pub page_size_bytes: usize,
    /// Number of elements in the parsed tree
    pub dom_node_count: usize,
    /// Document starts with a doctype
    pub has_doctype: bool,
    /// `<html lang>` value
    pub lang: Option<String>,
    /// First analytics vendor detected
    pub analytics_vendor: Option<String>,
    /// Rough token count of the body text
    pub word_count: usize,
    /// Character length of the normalized body text
    pub text_length: usize,
    /// `meta[name=viewport]` present
    pub viewport: bool,
    /// Responsive CSS indicators present
    pub media_queries: bool,
}

/// Runs every structural extractor over a snapshot.
///
/// # Arguments
///
/// * `snapshot` - The parsed page
/// * `raw_html` - The HTML the snapshot was built from (for raw-text checks)
/// * `requested_url` - Base for canonical resolution and source of the identity token
/// * `final_url` - Post-redirect URL the canonical link is compared with
/// * `analytics` - Analytics vendor patterns
pub fn extract_structural_signals(
    snapshot: &Snapshot,
    raw_html: &str,
    requested_url: &Url,
    final_url: &Url,
    analytics: &AnalyticsPatterns,
) -> StructuralSignals {
    let title = extract_title(snapshot);
    let (h1_count, h2_count) = count_headings(snapshot);
    let h1s = h1_texts(snapshot);
    let body_text = snapshot.body_text();
    let keywords = match_keywords(
        requested_url,
        title.as_deref().unwrap_or(""),
        &h1s,
        &body_text,
    );

    StructuralSignals {
        meta_description: extract_meta_description(snapshot),
        h1_count,
        h2_count,
        keywords,
        images: extract_image_stats(snapshot),
        favicon: has_favicon(snapshot),
        canonical: extract_canonical(snapshot, requested_url, final_url),
        meta_robots: extract_meta_robots(snapshot),
        social: extract_social_signals(snapshot),
        render_blocking: count_render_blocking(snapshot),
        page_size_bytes: raw_html.len(),
        dom_node_count: snapshot.element_count(),
        has_doctype: snapshot.has_doctype(),
        lang: extract_lang(snapshot),
        analytics_vendor: detect_analytics(snapshot, analytics),
        word_count: count_words(&body_text),
        text_length: body_text.chars().count(),
        viewport: has_viewport(snapshot),
        media_queries: has_media_queries(snapshot, raw_html),
        title,
    }
}

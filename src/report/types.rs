//! Serializable report types.
//!
//! Every category is always present and every field always set; absent data
//! shows up as `false`, `0`, or an empty string.

use serde::Serialize;

/// The complete audit report for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Page `<title>`
    pub title: TextField,
    /// `meta[name=description]`
    pub meta_description: TextField,
    /// Heading counts
    pub headings: HeadingsReport,
    /// Site identity keyword lookup
    pub keywords: KeywordsReport,
    /// Image alt-text and format coverage
    pub images: ImagesReport,
    /// Favicon link
    pub favicon: FaviconReport,
    /// Canonical link
    pub canonical: CanonicalReport,
    /// Robots meta tag
    pub meta_robots: MetaRobotsReport,
    /// Response compression
    pub compression: CompressionReport,
    /// Page size and final location
    pub page: PageReport,
    /// Document-level HTML checks
    pub html: HtmlReport,
    /// Render-blocking resources
    pub network: NetworkReport,
    /// Estimated timings
    pub performance: PerformanceReport,
    /// Threshold checks on the estimated timings
    pub metrics: MetricsReport,
    /// HTTPS, mixed content, unsafe links
    pub security: SecurityReport,
    /// Security response headers
    pub headers: HeadersReport,
    /// Mobile-friendliness indicators
    pub mobile: MobileReport,
    /// Origin probe results
    pub advanced: AdvancedReport,
    /// Analytics detection
    pub analytics: AnalyticsReport,
    /// Body text size
    pub content: ContentReport,
    /// Social sharing tags
    pub social: SocialReport,
}

/// A text value that may be missing from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    /// Whether the element was found
    pub exists: bool,
    /// Its text, or `""`
    pub text: String,
    /// Length of `text` in characters
    pub length: usize,
}

impl TextField {
    /// Builds the field from an optional value.
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(text) => Self {
                exists: true,
                length: text.chars().count(),
                text,
            },
            None => Self::default(),
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingsReport {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h1_exists: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsReport {
    /// Token derived from the requested host
    pub token: String,
    pub found_in_title_or_h1: bool,
    pub found_in_content: bool,
}

/// Image counts and coverage ratios. Ratios are `1.0` when the page has no images.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesReport {
    pub total: usize,
    pub with_alt: usize,
    pub modern_format: usize,
    pub alt_coverage: f64,
    pub modern_format_ratio: f64,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconReport {
    pub exists: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalReport {
    pub exists: bool,
    /// Resolved absolute canonical URL, or `""`
    pub url: String,
    pub matches_current: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRobotsReport {
    pub exists: bool,
    pub content: String,
    pub noindex: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionReport {
    pub enabled: bool,
    /// `content-encoding` value, or `""`
    pub encoding: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub size_bytes: usize,
    pub size_kb: f64,
    pub final_url: String,
    /// Final URL differs from the requested URL (ignoring one trailing slash)
    pub redirected: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlReport {
    pub dom_node_count: usize,
    pub has_doctype: bool,
    pub lang_attribute: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkReport {
    pub render_blocking_scripts: usize,
    pub render_blocking_stylesheets: usize,
    pub render_blocking_count: usize,
    pub has_render_blocking_resources: bool,
}

/// Timing estimates. `estimated` is always `true`: nothing here is measured.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub fetch_duration_ms: f64,
    pub ttfb_seconds: f64,
    pub fcp_seconds: f64,
    pub lcp_seconds: f64,
    pub cls: f64,
    pub estimated: bool,
}

/// Core Web Vitals thresholds applied to the estimates, not to field data.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub fcp_good: bool,
    pub lcp_good: bool,
    pub cls_good: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub is_https: bool,
    pub ssl_valid: bool,
    pub mixed_content_found: bool,
    pub unsafe_cross_links: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadersReport {
    pub hsts: bool,
    pub x_content_type_options: bool,
    pub x_frame_options: bool,
    pub content_security_policy: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileReport {
    pub viewport_exists: bool,
    pub media_queries_found: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedReport {
    pub robots_txt_exists: bool,
    pub sitemap_exists: bool,
    pub ads_txt_found: bool,
    /// Always `true`: a missing `ads.txt` is not a problem for most sites
    pub ads_txt_exists_or_not_relevant: bool,
    pub spf_record_exists: bool,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub detected: bool,
    /// First matching vendor, or `""`
    pub vendor: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub word_count: usize,
    pub text_length: usize,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialReport {
    pub og_title: bool,
    pub og_image: bool,
    pub twitter_card: bool,
}

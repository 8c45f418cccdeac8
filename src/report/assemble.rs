//! Report assembly.

use url::Url;

use super::types::*;
use crate::parse::{is_noindex, urls_match_ignoring_trailing_slash, StructuralSignals};
use crate::performance::PerformanceEstimate;
use crate::probe::ProbeResults;
use crate::security::SecuritySignals;

/// Fraction of `part` in `total`, `1.0` when there is nothing to count.
fn coverage(part: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        part as f64 / total as f64
    }
}

/// Merges every extractor's output into a complete `AuditReport`.
///
/// Pure: no I/O, no failure path. All documented defaults are applied here.
///
/// # Arguments
///
/// * `structural` - DOM-derived signals
/// * `security` - URL, header, and sub-resource signals
/// * `performance` - Timing estimates
/// * `probes` - Auxiliary probe outcomes
/// * `requested_url` - URL originally requested
/// * `final_url` - URL after redirects
pub fn assemble(
    structural: StructuralSignals,
    security: SecuritySignals,
    performance: PerformanceEstimate,
    probes: ProbeResults,
    requested_url: &Url,
    final_url: &Url,
) -> AuditReport {
    let images = structural.images;
    let render_blocking = structural.render_blocking;

    let canonical = match structural.canonical {
        Some(link) => CanonicalReport {
            exists: true,
            url: link.resolved.unwrap_or_default(),
            matches_current: link.matches_current,
        },
        None => CanonicalReport::default(),
    };

    let meta_robots = match structural.meta_robots {
        Some(content) => MetaRobotsReport {
            exists: true,
            noindex: is_noindex(&content),
            content,
        },
        None => MetaRobotsReport::default(),
    };

    let analytics = match structural.analytics_vendor {
        Some(vendor) => AnalyticsReport {
            detected: true,
            vendor,
        },
        None => AnalyticsReport::default(),
    };

    AuditReport {
        title: TextField::from_option(structural.title),
        meta_description: TextField::from_option(structural.meta_description),
        headings: HeadingsReport {
            h1_count: structural.h1_count,
            h2_count: structural.h2_count,
            h1_exists: structural.h1_count > 0,
        },
        keywords: KeywordsReport {
            token: structural.keywords.token,
            found_in_title_or_h1: structural.keywords.found_in_title_or_h1,
            found_in_content: structural.keywords.found_in_content,
        },
        images: ImagesReport {
            total: images.total,
            with_alt: images.with_alt,
            modern_format: images.modern_format,
            alt_coverage: coverage(images.with_alt, images.total),
            modern_format_ratio: coverage(images.modern_format, images.total),
        },
        favicon: FaviconReport {
            exists: structural.favicon,
        },
        canonical,
        meta_robots,
        compression: CompressionReport {
            enabled: security.content_encoding.is_some(),
            encoding: security.content_encoding.unwrap_or_default(),
        },
        page: PageReport {
            size_bytes: structural.page_size_bytes,
            size_kb: structural.page_size_bytes as f64 / 1024.0,
            final_url: final_url.to_string(),
            redirected: !urls_match_ignoring_trailing_slash(
                requested_url.as_str(),
                final_url.as_str(),
            ),
        },
        html: HtmlReport {
            dom_node_count: structural.dom_node_count,
            has_doctype: structural.has_doctype,
            lang_attribute: structural.lang.unwrap_or_default(),
        },
        network: NetworkReport {
            render_blocking_scripts: render_blocking.scripts,
            render_blocking_stylesheets: render_blocking.stylesheets,
            render_blocking_count: render_blocking.total(),
            has_render_blocking_resources: render_blocking.total() > 0,
        },
        metrics: MetricsReport {
            fcp_good: performance.fcp_good(),
            lcp_good: performance.lcp_good(),
            cls_good: performance.cls_good(),
        },
        performance: PerformanceReport {
            fetch_duration_ms: performance.fetch_duration_ms,
            ttfb_seconds: performance.ttfb_seconds,
            fcp_seconds: performance.fcp_seconds,
            lcp_seconds: performance.lcp_seconds,
            cls: performance.cls,
            estimated: true,
        },
        security: SecurityReport {
            is_https: security.is_https,
            ssl_valid: security.is_https,
            mixed_content_found: security.mixed_content,
            unsafe_cross_links: security.unsafe_cross_links,
        },
        headers: HeadersReport {
            hsts: security.hsts,
            x_content_type_options: security.x_content_type_options,
            x_frame_options: security.x_frame_options,
            content_security_policy: security.content_security_policy,
        },
        mobile: MobileReport {
            viewport_exists: structural.viewport,
            media_queries_found: structural.media_queries,
        },
        advanced: AdvancedReport {
            robots_txt_exists: probes.robots_txt,
            sitemap_exists: probes.sitemap,
            ads_txt_found: probes.ads_txt,
            ads_txt_exists_or_not_relevant: true,
            spf_record_exists: probes.spf,
        },
        analytics,
        content: ContentReport {
            word_count: structural.word_count,
            text_length: structural.text_length,
        },
        social: SocialReport {
            og_title: structural.social.og_title,
            og_image: structural.social.og_image,
            twitter_card: structural.social.twitter_card,
        },
    }
}

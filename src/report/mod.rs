//! Audit report assembly and serialization.
//!
//! The report is a fixed set of categories, each serialized in camelCase.
//! Assembly never fails and never leaves a field unset.

mod assemble;
mod types;

// Re-export public API
pub use assemble::assemble;
pub use types::{
    AdvancedReport, AnalyticsReport, AuditReport, CanonicalReport, CompressionReport,
    ContentReport, FaviconReport, HeadersReport, HeadingsReport, HtmlReport, ImagesReport,
    KeywordsReport, MetaRobotsReport, MetricsReport, MobileReport, NetworkReport, PageReport,
    PerformanceReport, SecurityReport, SocialReport, TextField,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalyticsPatterns, PerformanceModel};
    use crate::dom::Snapshot;
    use crate::parse::extract_structural_signals;
    use crate::performance::estimate_performance;
    use crate::probe::ProbeResults;
    use crate::security::{analyze_security, SecuritySignals};
    use std::collections::HashMap;
    use url::Url;

    fn report_for(html: &str, requested: &str, final_url: &str) -> AuditReport {
        let requested = Url::parse(requested).unwrap();
        let final_url = Url::parse(final_url).unwrap();
        let snapshot = Snapshot::parse(html);
        let structural = extract_structural_signals(
            &snapshot,
            html,
            &requested,
            &final_url,
            &AnalyticsPatterns::default(),
        );
        let security = analyze_security(&requested, &HashMap::new(), &snapshot);
        let performance = estimate_performance(1000.0, &PerformanceModel::default());
        assemble(
            structural,
            security,
            performance,
            ProbeResults::default(),
            &requested,
            &final_url,
        )
    }

    #[test]
    fn test_zero_images_default_to_full_coverage() {
        let report = report_for("<p>No pictures</p>", "https://acme.com", "https://acme.com");
        assert_eq!(report.images.total, 0);
        assert_eq!(report.images.alt_coverage, 1.0);
        assert_eq!(report.images.modern_format_ratio, 1.0);
    }

    #[test]
    fn test_image_ratios() {
        let html = r#"<img src="a.webp" alt="a"><img src="b.png"><img src="c.png"><img src="d.avif" alt="d">"#;
        let report = report_for(html, "https://acme.com", "https://acme.com");
        assert_eq!(report.images.alt_coverage, 0.5);
        assert_eq!(report.images.modern_format_ratio, 0.5);
    }

    #[test]
    fn test_missing_elements_use_defaults() {
        let report = report_for("", "https://acme.com", "https://acme.com");
        assert_eq!(report.title, TextField::default());
        assert_eq!(report.meta_description, TextField::default());
        assert_eq!(report.canonical, CanonicalReport::default());
        assert_eq!(report.meta_robots, MetaRobotsReport::default());
        assert_eq!(report.analytics, AnalyticsReport::default());
        assert!(!report.headings.h1_exists);
        assert_eq!(report.html.lang_attribute, "");
        assert!(!report.compression.enabled);
        assert_eq!(report.compression.encoding, "");
    }

    #[test]
    fn test_title_length_counts_characters() {
        let report = report_for("<title>Café</title>", "https://acme.com", "https://acme.com");
        assert_eq!(report.title.text, "Café");
        assert_eq!(report.title.length, 4);
    }

    #[test]
    fn test_meta_robots_noindex() {
        let html = r#"<meta name="robots" content="noindex,nofollow">"#;
        let report = report_for(html, "https://acme.com", "https://acme.com");
        assert!(report.meta_robots.exists);
        assert!(report.meta_robots.noindex);
        assert_eq!(report.meta_robots.content, "noindex,nofollow");
    }

    #[test]
    fn test_page_size_and_redirect() {
        let html = "x".repeat(2048);
        let report = report_for(&html, "http://acme.com", "https://acme.com/");
        assert_eq!(report.page.size_bytes, 2048);
        assert_eq!(report.page.size_kb, 2.0);
        assert!(report.page.redirected);
        assert_eq!(report.page.final_url, "https://acme.com/");

        let report = report_for("", "https://acme.com", "https://acme.com/");
        assert!(!report.page.redirected);
    }

    #[test]
    fn test_constant_fields() {
        let report = report_for("", "https://acme.com", "https://acme.com");
        assert!(report.performance.estimated);
        assert!(report.advanced.ads_txt_exists_or_not_relevant);
        assert!(!report.advanced.ads_txt_found);
    }

    #[test]
    fn test_ssl_valid_follows_scheme() {
        let report = report_for("", "http://acme.com", "http://acme.com");
        assert!(!report.security.is_https);
        assert!(!report.security.ssl_valid);

        let report = report_for("", "https://acme.com", "https://acme.com");
        assert!(report.security.ssl_valid);
    }

    #[test]
    fn test_compression_from_security_signals() {
        let url = Url::parse("https://acme.com").unwrap();
        let snapshot = Snapshot::parse("");
        let structural =
            extract_structural_signals(&snapshot, "", &url, &url, &AnalyticsPatterns::default());
        let security = SecuritySignals {
            content_encoding: Some("br".to_string()),
            ..SecuritySignals::default()
        };
        let report = assemble(
            structural,
            security,
            estimate_performance(0.0, &PerformanceModel::default()),
            ProbeResults::default(),
            &url,
            &url,
        );
        assert!(report.compression.enabled);
        assert_eq!(report.compression.encoding, "br");
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let report = report_for("", "https://acme.com", "https://acme.com");
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["metaDescription"]["exists"].is_boolean());
        assert!(value["images"]["altCoverage"].is_number());
        assert!(value["advanced"]["adsTxtExistsOrNotRelevant"].is_boolean());
        assert!(value["network"]["hasRenderBlockingResources"].is_boolean());
        assert!(value.get("meta_description").is_none());
    }
}

//! Every report category and field is present, whatever the input looks like.

mod helpers;

use helpers::{auditor, input, FailingResolver};
use serde_json::Value;

const EXPECTED: &[(&str, &[&str])] = &[
    ("title", &["exists", "text", "length"]),
    ("metaDescription", &["exists", "text", "length"]),
    ("headings", &["h1Count", "h2Count", "h1Exists"]),
    ("keywords", &["token", "foundInTitleOrH1", "foundInContent"]),
    (
        "images",
        &["total", "withAlt", "modernFormat", "altCoverage", "modernFormatRatio"],
    ),
    ("favicon", &["exists"]),
    ("canonical", &["exists", "url", "matchesCurrent"]),
    ("metaRobots", &["exists", "content", "noindex"]),
    ("compression", &["enabled", "encoding"]),
    ("page", &["sizeBytes", "sizeKb", "finalUrl", "redirected"]),
    ("html", &["domNodeCount", "hasDoctype", "langAttribute"]),
    (
        "network",
        &[
            "renderBlockingScripts",
            "renderBlockingStylesheets",
            "renderBlockingCount",
            "hasRenderBlockingResources",
        ],
    ),
    (
        "performance",
        &["fetchDurationMs", "ttfbSeconds", "fcpSeconds", "lcpSeconds", "cls", "estimated"],
    ),
    ("metrics", &["fcpGood", "lcpGood", "clsGood"]),
    (
        "security",
        &["isHttps", "sslValid", "mixedContentFound", "unsafeCrossLinks"],
    ),
    (
        "headers",
        &["hsts", "xContentTypeOptions", "xFrameOptions", "contentSecurityPolicy"],
    ),
    ("mobile", &["viewportExists", "mediaQueriesFound"]),
    (
        "advanced",
        &[
            "robotsTxtExists",
            "sitemapExists",
            "adsTxtFound",
            "adsTxtExistsOrNotRelevant",
            "spfRecordExists",
        ],
    ),
    ("analytics", &["detected", "vendor"]),
    ("content", &["wordCount", "textLength"]),
    ("social", &["ogTitle", "ogImage", "twitterCard"]),
];

fn assert_complete(report: &Value) {
    let categories = report.as_object().unwrap();
    assert_eq!(categories.len(), EXPECTED.len());
    for (category, fields) in EXPECTED {
        let object = report[*category]
            .as_object()
            .unwrap_or_else(|| panic!("missing category {category}"));
        assert_eq!(object.len(), fields.len(), "unexpected fields in {category}");
        for field in *fields {
            let value = &object
                .get(*field)
                .unwrap_or_else(|| panic!("missing {category}.{field}"));
            assert!(!value.is_null(), "{category}.{field} is null");
            assert!(
                value.is_boolean() || value.is_number() || value.is_string(),
                "{category}.{field} is not a primitive"
            );
        }
    }
}

async fn audit_json(html: &str) -> Value {
    // Port 1 refuses connections, so the probes fail fast
    let report = auditor(FailingResolver)
        .audit(&input("http://127.0.0.1:1/", html))
        .await
        .unwrap();
    serde_json::to_value(&report).unwrap()
}

#[tokio::test]
async fn test_empty_document_is_complete() {
    let report = audit_json("").await;
    assert_complete(&report);
    assert_eq!(report["title"]["text"], "");
    assert_eq!(report["canonical"]["url"], "");
    assert_eq!(report["analytics"]["vendor"], "");
    assert_eq!(report["images"]["altCoverage"], 1.0);
}

#[tokio::test]
async fn test_garbage_document_is_complete() {
    let report = audit_json("<<<>>><html><<title>>\u{0}<img src=>><a target=_blank>").await;
    assert_complete(&report);
}

#[tokio::test]
async fn test_rich_document_is_complete() {
    let html = r#"<!doctype html><html lang="de"><head><title>T</title>
        <meta name="description" content="d"><meta name="robots" content="noindex">
        <link rel="canonical" href="https://other.example/"></head>
        <body><img src="a.avif" alt="a"><p>words here</p></body></html>"#;
    let report = audit_json(html).await;
    assert_complete(&report);
    assert_eq!(report["metaRobots"]["noindex"], true);
    assert_eq!(report["canonical"]["matchesCurrent"], false);
    assert_eq!(report["html"]["langAttribute"], "de");
}

//! One failing or stalled probe never changes another probe's result.

mod helpers;

use std::time::{Duration, Instant};

use helpers::{auditor, input, mount_get_ok, FailingResolver, StallingResolver, StaticResolver};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_spf_failure_does_not_affect_robots() {
    let server = MockServer::start().await;
    mount_get_ok(&server, "/robots.txt").await;

    let report = auditor(FailingResolver)
        .audit(&input(&server.uri(), "<title>x</title>"))
        .await
        .unwrap();

    assert!(report.advanced.robots_txt_exists);
    assert!(!report.advanced.spf_record_exists);
}

#[tokio::test]
async fn test_spf_timeout_does_not_affect_robots() {
    let server = MockServer::start().await;
    mount_get_ok(&server, "/robots.txt").await;

    let started = Instant::now();
    let report = auditor(StallingResolver)
        .audit(&input(&server.uri(), "<title>x</title>"))
        .await
        .unwrap();

    // Probe timeout is 500ms; the stalled lookup must not hold up the audit
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(report.advanced.robots_txt_exists);
    assert!(!report.advanced.spf_record_exists);
    assert!(report.title.exists);
}

#[tokio::test]
async fn test_slow_sitemap_only_affects_sitemap() {
    let server = MockServer::start().await;
    mount_get_ok(&server, "/robots.txt").await;
    mount_get_ok(&server, "/ads.txt").await;
    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let report = auditor(StaticResolver(vec!["v=spf1 include:_spf.example.com ~all".to_string()]))
        .audit(&input(&server.uri(), ""))
        .await
        .unwrap();

    assert!(report.advanced.robots_txt_exists);
    assert!(!report.advanced.sitemap_exists);
    assert!(report.advanced.ads_txt_found);
    assert!(report.advanced.spf_record_exists);
}

#[tokio::test]
async fn test_server_errors_are_negative_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_get_ok(&server, "/ads.txt").await;

    let report = auditor(FailingResolver)
        .audit(&input(&server.uri(), ""))
        .await
        .unwrap();

    assert!(!report.advanced.robots_txt_exists);
    assert!(!report.advanced.sitemap_exists);
    assert!(report.advanced.ads_txt_found);
    assert!(report.advanced.ads_txt_exists_or_not_relevant);
}

#[tokio::test]
async fn test_probes_run_concurrently() {
    let server = MockServer::start().await;
    for (verb, p) in [
        ("GET", "/robots.txt"),
        ("HEAD", "/sitemap.xml"),
        ("GET", "/ads.txt"),
    ] {
        Mock::given(method(verb))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
            .mount(&server)
            .await;
    }

    let started = Instant::now();
    let report = auditor(StaticResolver(vec![]))
        .audit(&input(&server.uri(), ""))
        .await
        .unwrap();

    // Sequential probes would take at least 900ms
    assert!(started.elapsed() < Duration::from_millis(900));
    assert!(report.advanced.robots_txt_exists);
    assert!(report.advanced.sitemap_exists);
    assert!(report.advanced.ads_txt_found);
}

//! Audit entry point.
//!
//! An audit validates the input URLs, runs the synchronous extractors over a
//! DOM snapshot, runs the auxiliary probes concurrently, and assembles the
//! report. Invalid input URLs are the only error a caller can see.

mod input;

use std::sync::Arc;
use std::time::Instant;

use hickory_resolver::TokioAsyncResolver;

pub use input::{validate_input_url, AuditInput, FetchResult};

use crate::config::AuditConfig;
use crate::dom::Snapshot;
use crate::error_handling::AuditError;
use crate::parse::extract_structural_signals;
use crate::performance::estimate_performance;
use crate::probe::{run_probes, ProbeOrigin, ProbeResults, TxtLookup};
use crate::report::{assemble, AuditReport};
use crate::security::analyze_security;

/// Audits one page.
///
/// # Arguments
///
/// * `input` - Requested URL, HTML body, and fetch metadata
/// * `client` - HTTP client used by the origin probes
/// * `resolver` - TXT record source used by the SPF probe
/// * `config` - Probe timeout, analytics patterns, and performance model
///
/// # Errors
///
/// Returns `AuditError` if `requested_url` or `fetch.final_url` is not an
/// absolute http(s) URL. Every other failure is absorbed into the report.
pub async fn audit_page<R>(
    input: &AuditInput,
    client: &reqwest::Client,
    resolver: &R,
    config: &AuditConfig,
) -> Result<AuditReport, AuditError>
where
    R: TxtLookup + ?Sized,
{
    let requested_url = validate_input_url(&input.requested_url)?;
    let final_url = validate_input_url(&input.fetch.final_url)?;
    log::info!("Auditing {requested_url}");

    let start = Instant::now();
    // The snapshot is dropped before the probes are awaited
    let (structural, security) = {
        let snapshot = Snapshot::parse(&input.html);
        let structural = extract_structural_signals(
            &snapshot,
            &input.html,
            &requested_url,
            &final_url,
            &config.analytics,
        );
        let security = analyze_security(&requested_url, &input.fetch.headers, &snapshot);
        (structural, security)
    };
    let performance = estimate_performance(input.fetch.fetch_duration_ms, &config.performance);
    log::debug!(
        "Extracted on-page signals for {requested_url} in {:.2}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let probes = match ProbeOrigin::from_url(&final_url) {
        Ok(origin) => {
            let probe_start = Instant::now();
            let results = run_probes(client, resolver, &origin, config.probe_timeout).await;
            log::debug!(
                "Probes for {origin} finished in {:.2}ms",
                probe_start.elapsed().as_secs_f64() * 1000.0
            );
            results
        }
        Err(e) => {
            log::warn!("Skipping origin probes for {final_url}: {e}");
            ProbeResults::default()
        }
    };

    let report = assemble(
        structural,
        security,
        performance,
        probes,
        &requested_url,
        &final_url,
    );
    log::info!(
        "Audit of {requested_url} complete: {} bytes, {} DOM nodes",
        report.page.size_bytes,
        report.html.dom_node_count
    );
    Ok(report)
}

/// Reusable audit runner holding the shared client, resolver, and configuration.
///
/// Holds no per-audit state; one `Auditor` can serve concurrent audits.
pub struct Auditor<R = TokioAsyncResolver> {
    client: Arc<reqwest::Client>,
    resolver: Arc<R>,
    config: AuditConfig,
}

impl<R: TxtLookup> Auditor<R> {
    /// Creates an auditor from initialized components.
    pub fn new(client: Arc<reqwest::Client>, resolver: Arc<R>, config: AuditConfig) -> Self {
        Self {
            client,
            resolver,
            config,
        }
    }

    /// The configuration every audit runs with.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audits one page. See [`audit_page`].
    pub async fn audit(&self, input: &AuditInput) -> Result<AuditReport, AuditError> {
        audit_page(input, &self.client, self.resolver.as_ref(), &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ProbeError;
    use std::time::Duration;

    struct NoRecords;

    impl TxtLookup for NoRecords {
        async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, ProbeError> {
            Ok(Vec::new())
        }
    }

    fn auditor() -> Auditor<NoRecords> {
        let config = AuditConfig {
            probe_timeout: Duration::from_millis(500),
            ..AuditConfig::default()
        };
        Auditor::new(Arc::new(reqwest::Client::new()), Arc::new(NoRecords), config)
    }

    fn input(requested: &str, final_url: &str) -> AuditInput {
        AuditInput {
            requested_url: requested.to_string(),
            html: "<title>t</title>".to_string(),
            fetch: FetchResult {
                final_url: final_url.to_string(),
                ..FetchResult::default()
            },
        }
    }

    #[tokio::test]
    async fn test_invalid_requested_url_is_an_error() {
        let result = auditor().audit(&input("not a url", "http://127.0.0.1:1/")).await;
        assert!(matches!(result, Err(AuditError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_invalid_final_url_is_an_error() {
        let result = auditor().audit(&input("http://127.0.0.1:1/", "mailto:a@b.c")).await;
        assert!(matches!(result, Err(AuditError::UnsupportedScheme { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_origin_still_produces_report() {
        let report = auditor()
            .audit(&input("http://127.0.0.1:1/", "http://127.0.0.1:1/"))
            .await
            .unwrap();
        assert!(report.title.exists);
        assert!(!report.advanced.robots_txt_exists);
        assert!(!report.advanced.spf_record_exists);
    }

    #[test]
    fn test_audit_future_is_send() {
        fn assert_send<T: Send>(_: T) {}
        let auditor = auditor();
        let input = input("https://acme.com", "https://acme.com");
        assert_send(auditor.audit(&input));
    }
}

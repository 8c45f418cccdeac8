// Shared test helpers for building audits against a local origin.
//
// Tests point both the requested and final URL at a wiremock server so the
// origin probes hit it instead of the network.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use page_audit::error_handling::ProbeError;
use page_audit::probe::TxtLookup;
use page_audit::{AuditConfig, AuditInput, Auditor, FetchResult};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Resolver that returns a fixed set of TXT records.
pub struct StaticResolver(pub Vec<String>);

impl TxtLookup for StaticResolver {
    async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, ProbeError> {
        Ok(self.0.clone())
    }
}

/// Resolver whose lookups always fail.
pub struct FailingResolver;

impl TxtLookup for FailingResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ProbeError> {
        Err(ProbeError::Dns(format!("SERVFAIL for {name}")))
    }
}

/// Resolver whose lookups never finish within any reasonable probe timeout.
pub struct StallingResolver;

impl TxtLookup for StallingResolver {
    async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, ProbeError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(vec!["v=spf1 -all".to_string()])
    }
}

/// Mounts a 200 response for `GET <p>`.
pub async fn mount_get_ok(server: &MockServer, p: &str) {
    Mock::given(method("GET"))
        .and(path(p))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Mounts a 200 response for `HEAD <p>`.
pub async fn mount_head_ok(server: &MockServer, p: &str) {
    Mock::given(method("HEAD"))
        .and(path(p))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

/// Builds an auditor with a short probe timeout and the given resolver.
pub fn auditor<R: TxtLookup>(resolver: R) -> Auditor<R> {
    let config = AuditConfig {
        probe_timeout: Duration::from_millis(500),
        ..AuditConfig::default()
    };
    Auditor::new(Arc::new(reqwest::Client::new()), Arc::new(resolver), config)
}

/// Builds an audit input whose requested and final URL are both `url`.
pub fn input(url: &str, html: &str) -> AuditInput {
    AuditInput {
        requested_url: url.to_string(),
        html: html.to_string(),
        fetch: FetchResult {
            final_url: url.to_string(),
            headers: HashMap::new(),
            fetch_duration_ms: 300.0,
        },
    }
}

/// Builds an audit input that was redirected from `requested` to `final_url`.
pub fn input_redirected(requested: &str, final_url: &str, html: &str) -> AuditInput {
    let mut audit_input = input(requested, html);
    audit_input.fetch.final_url = final_url.to_string();
    audit_input
}

/// Final URL whose origin refuses connections, keeping audits off the network.
pub const UNREACHABLE_ORIGIN: &str = "http://127.0.0.1:1/";

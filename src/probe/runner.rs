//! Concurrent probe execution.

use std::future::Future;
use std::time::Duration;

use crate::config::{ADS_TXT_PATH, ROBOTS_TXT_PATH, SITEMAP_XML_PATH};
use crate::error_handling::{categorize_probe_error, ProbeError};

use super::{probe_get, probe_head, probe_spf, ProbeOrigin, TxtLookup};

/// Outcome of the four auxiliary probes. Every field defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeResults {
    /// `robots.txt` answered 200
    pub robots_txt: bool,
    /// `sitemap.xml` answered 200
    pub sitemap: bool,
    /// `ads.txt` answered 200
    pub ads_txt: bool,
    /// A TXT record on the bare host contains `v=spf1`
    pub spf: bool,
}

/// Runs one probe under its timeout and collapses every failure to `false`.
async fn bounded<F>(name: &str, origin: &ProbeOrigin, timeout: Duration, probe: F) -> bool
where
    F: Future<Output = Result<bool, ProbeError>>,
{
    let outcome = match tokio::time::timeout(timeout, probe).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::Timeout {
            after_ms: timeout.as_millis(),
        }),
    };

    match outcome {
        Ok(found) => {
            log::debug!("{name} probe for {origin}: {found}");
            found
        }
        Err(e) => {
            let kind = categorize_probe_error(&e);
            log::debug!("{name} probe for {origin} failed ({kind}): {e}");
            false
        }
    }
}

/// Probes a well-known HTTP path, treating an unbuildable URL as a failed probe.
async fn probe_path(
    client: &reqwest::Client,
    origin: &ProbeOrigin,
    path: &str,
    head: bool,
) -> Result<bool, ProbeError> {
    let url = origin.url_for(path)?;
    if head {
        probe_head(client, url).await
    } else {
        probe_get(client, url).await
    }
}

/// Runs all auxiliary probes concurrently and waits for every one to finish.
///
/// Total latency is bounded by the slowest probe, which is itself bounded by
/// `timeout`. No probe's failure affects another's result.
///
/// # Arguments
///
/// * `client` - HTTP client for the `robots.txt`, `sitemap.xml`, and `ads.txt` probes
/// * `resolver` - TXT record source for the SPF probe
/// * `origin` - Origin derived from the final page URL
/// * `timeout` - Per-probe timeout
pub async fn run_probes<R>(
    client: &reqwest::Client,
    resolver: &R,
    origin: &ProbeOrigin,
    timeout: Duration,
) -> ProbeResults
where
    R: TxtLookup + ?Sized,
{
    let (robots_txt, sitemap, ads_txt, spf) = tokio::join!(
        bounded(
            "robots.txt",
            origin,
            timeout,
            probe_path(client, origin, ROBOTS_TXT_PATH, false)
        ),
        bounded(
            "sitemap.xml",
            origin,
            timeout,
            probe_path(client, origin, SITEMAP_XML_PATH, true)
        ),
        bounded(
            "ads.txt",
            origin,
            timeout,
            probe_path(client, origin, ADS_TXT_PATH, false)
        ),
        bounded("SPF", origin, timeout, probe_spf(resolver, origin.spf_name())),
    );

    ProbeResults {
        robots_txt,
        sitemap,
        ads_txt,
        spf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FailingResolver;

    impl TxtLookup for FailingResolver {
        async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, ProbeError> {
            Err(ProbeError::Dns("SERVFAIL".to_string()))
        }
    }

    struct StallingResolver;

    impl TxtLookup for StallingResolver {
        async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, ProbeError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(vec!["v=spf1 -all".to_string()])
        }
    }

    struct SpfResolver;

    impl TxtLookup for SpfResolver {
        async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ProbeError> {
            assert_eq!(name, "127.0.0.1");
            Ok(vec!["v=spf1 -all".to_string()])
        }
    }

    fn origin(server: &MockServer) -> ProbeOrigin {
        ProbeOrigin::from_url(&Url::parse(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_all_probes_succeed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/sitemap.xml"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ads.txt"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let results = run_probes(
            &client,
            &SpfResolver,
            &origin(&server),
            Duration::from_secs(3),
        )
        .await;
        assert_eq!(
            results,
            ProbeResults {
                robots_txt: true,
                sitemap: true,
                ads_txt: true,
                spf: true,
            }
        );
    }

    #[tokio::test]
    async fn test_dns_failure_is_isolated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let results = run_probes(
            &client,
            &FailingResolver,
            &origin(&server),
            Duration::from_secs(3),
        )
        .await;
        assert!(results.robots_txt);
        assert!(!results.sitemap);
        assert!(!results.ads_txt);
        assert!(!results.spf);
    }

    #[tokio::test]
    async fn test_stalled_probe_times_out_alone() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/sitemap.xml"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let started = Instant::now();
        let results = run_probes(
            &client,
            &StallingResolver,
            &origin(&server),
            Duration::from_millis(300),
        )
        .await;
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(results.robots_txt);
        assert!(!results.sitemap);
        assert!(!results.spf);
    }

    #[tokio::test]
    async fn test_unreachable_origin_yields_defaults() {
        // Port 1 on localhost refuses connections
        let origin = ProbeOrigin::from_url(&Url::parse("http://127.0.0.1:1/").unwrap()).unwrap();
        let client = reqwest::Client::new();
        let results = run_probes(&client, &FailingResolver, &origin, Duration::from_secs(2)).await;
        assert_eq!(results, ProbeResults::default());
    }
}

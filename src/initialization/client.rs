//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Maximum redirect hops followed by the page fetch and the probes
const MAX_REDIRECT_HOPS: usize = 10;

/// Initializes the HTTP client shared by the page fetch and the origin probes.
///
/// Creates a `reqwest::Client` configured with:
/// - The given User-Agent
/// - An overall request timeout
/// - Redirect following (up to `MAX_REDIRECT_HOPS` hops)
///
/// Automatic body decompression stays off so `content-encoding` reaches the audit.
///
/// # Arguments
///
/// * `timeout` - Overall per-request timeout
/// * `user_agent` - User-Agent header value
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    timeout: Duration,
    user_agent: &str,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_init_client_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "page_audit-test/1.0"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = init_client(Duration::from_secs(5), "page_audit-test/1.0").unwrap();
        let response = client.get(server.uri()).send().await.unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_init_client_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(wiremock::matchers::path("/new"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = init_client(Duration::from_secs(5), "test").unwrap();
        let response = client
            .get(format!("{}/old", server.uri()))
            .send()
            .await
            .unwrap();
        assert!(response.url().path().ends_with("/new"));
    }
}

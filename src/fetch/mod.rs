//! Page fetching for the command-line binary.
//!
//! The audit engine consumes already-fetched HTML plus a `FetchResult`; this
//! module produces both from a live request. It follows redirects, caps the
//! body size, decodes gzip itself, and retries transient failures.

mod request;
mod response;

use std::time::Instant;

use tokio_retry::RetryIf;

use crate::audit::{validate_input_url, FetchResult};
use crate::config::HEADER_CONTENT_ENCODING;
use crate::error_handling::{get_retry_strategy, is_retriable_fetch_error, FetchError};

use request::RequestHeaders;
use response::{collect_headers, decode_body, read_body_with_limit};

/// Whether a fetch error is transient enough to retry.
fn should_retry(error: &FetchError) -> bool {
    match error {
        FetchError::Request(e) => is_retriable_fetch_error(e),
        _ => false,
    }
}

/// Performs a single request and reads the full response.
async fn fetch_once(
    client: &reqwest::Client,
    url: &url::Url,
) -> Result<(String, FetchResult), FetchError> {
    let start = Instant::now();
    let response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
        .send()
        .await?
        .error_for_status()?;

    let final_url = response.url().to_string();
    let headers = collect_headers(response.headers());
    let raw = read_body_with_limit(response).await?;
    let fetch_duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let encoding = headers.get(HEADER_CONTENT_ENCODING).map(String::as_str);
    let html = decode_body(raw, encoding)?;

    Ok((
        html,
        FetchResult {
            final_url,
            headers,
            fetch_duration_ms,
        },
    ))
}

/// Fetches a page and returns its HTML together with the fetch metadata.
///
/// `fetch_duration_ms` covers the final attempt only, from sending the request
/// to reading the last body byte.
///
/// # Arguments
///
/// * `client` - HTTP client (timeout, user agent, and redirect policy already set)
/// * `url` - Absolute http(s) URL to fetch
///
/// # Errors
///
/// Returns `FetchError` if the URL is invalid, the request fails after retries,
/// the server answers with an error status, or the body is too large or undecodable.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<(String, FetchResult), FetchError> {
    let url = validate_input_url(url)?;
    log::debug!("Fetching {url}");

    let target = &url;
    let result = RetryIf::start(
        get_retry_strategy(),
        || async move {
            let attempt = fetch_once(client, target).await;
            if let Err(e) = &attempt {
                log::debug!("Fetch attempt for {target} failed: {e}");
            }
            attempt
        },
        should_retry,
    )
    .await?;

    log::info!(
        "Fetched {} ({} bytes in {:.0}ms)",
        result.1.final_url,
        result.0.len(),
        result.1.fetch_duration_ms
    );
    Ok(result)
}

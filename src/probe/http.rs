//! HTTP existence probes.

use reqwest::{Method, StatusCode};
use url::Url;

use crate::error_handling::ProbeError;

/// Sends a single request and reports whether the resource exists.
///
/// Only a final 200 counts; redirects are followed by the client.
async fn probe_exists(client: &reqwest::Client, method: Method, url: Url) -> Result<bool, ProbeError> {
    let response = client.request(method, url).send().await?;
    match response.status() {
        StatusCode::OK => Ok(true),
        status => Err(ProbeError::Status(status.as_u16())),
    }
}

/// Probes a URL with `GET`, used for `robots.txt` and `ads.txt`.
///
/// # Errors
///
/// Returns `ProbeError::Http` on transport failure and `ProbeError::Status`
/// for any status other than 200.
pub async fn probe_get(client: &reqwest::Client, url: Url) -> Result<bool, ProbeError> {
    probe_exists(client, Method::GET, url).await
}

/// Probes a URL with `HEAD`, used for `sitemap.xml` so large sitemaps are not downloaded.
///
/// # Errors
///
/// Same as [`probe_get`].
pub async fn probe_head(client: &reqwest::Client, url: Url) -> Result<bool, ProbeError> {
    probe_exists(client, Method::HEAD, url).await
}

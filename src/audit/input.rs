//! Audit input types and validation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// What the HTTP fetch collaborator observed while retrieving the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    /// URL after redirects
    pub final_url: String,
    /// Response headers, keyed by lower-case name
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Wall-clock duration of the fetch in milliseconds
    #[serde(default)]
    pub fetch_duration_ms: f64,
}

/// One page to audit: the URL, its HTML, and the fetch metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditInput {
    /// Absolute URL originally requested
    pub requested_url: String,
    /// Raw HTML body, already fetched
    #[serde(default)]
    pub html: String,
    /// Fetch metadata
    pub fetch: FetchResult,
}

/// Parses an audit URL without rewriting it.
///
/// Accepts absolute `http`/`https` URLs with a host, up to `MAX_URL_LENGTH` bytes.
///
/// # Errors
///
/// * `AuditError::UrlTooLong` - the input exceeds `MAX_URL_LENGTH`
/// * `AuditError::InvalidUrl` - the input is not an absolute URL with a host
/// * `AuditError::UnsupportedScheme` - the scheme is neither `http` nor `https`
pub fn validate_input_url(raw: &str) -> Result<Url, AuditError> {
    if raw.len() > MAX_URL_LENGTH {
        return Err(AuditError::UrlTooLong {
            length: raw.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let url = Url::parse(raw).map_err(|e| AuditError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AuditError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: other.to_string(),
            })
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(AuditError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

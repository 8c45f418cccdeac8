//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize probe errors and configure the
//! retry strategy used by the page fetch.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{ProbeError, ProbeFailureKind};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR` (doubles delay each retry)
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Maximum retries: `RETRY_MAX_ATTEMPTS`
///
/// Only the page fetch retries. Auxiliary probes are single-shot by contract.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    // Delays are `base^n * factor`, so the base carries the growth rate
    ExponentialBackoff::from_millis(crate::config::RETRY_FACTOR)
        .factor(crate::config::RETRY_INITIAL_DELAY_MS / crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS)
}

/// Categorizes a `ProbeError` into a `ProbeFailureKind`.
///
/// # Arguments
///
/// * `error` - The probe error to categorize
///
/// # Returns
///
/// The failure kind used when logging the probe's negative result.
pub fn categorize_probe_error(error: &ProbeError) -> ProbeFailureKind {
    match error {
        ProbeError::Timeout { .. } => ProbeFailureKind::Timeout,
        ProbeError::Status(_) => ProbeFailureKind::Status,
        ProbeError::Dns(_) => ProbeFailureKind::Dns,
        ProbeError::InvalidOrigin(_) => ProbeFailureKind::Other,
        ProbeError::Http(e) => {
            if e.is_timeout() {
                ProbeFailureKind::Timeout
            } else if e.is_connect() {
                ProbeFailureKind::Connect
            } else if e.is_status() {
                ProbeFailureKind::Status
            } else {
                ProbeFailureKind::Other
            }
        }
    }
}

/// Whether a page fetch error is worth retrying.
///
/// Timeouts, connection failures, and 5xx/429 responses are transient; everything
/// else (4xx, builder errors, redirect loops) is returned immediately.
pub fn is_retriable_fetch_error(error: &reqwest::Error) -> bool {
    if let Some(status) = error.status() {
        return status.is_server_error() || status.as_u16() == 429;
    }
    error.is_timeout() || error.is_connect()
}

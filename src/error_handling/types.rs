//! Error type definitions.
//!
//! This module defines all error types used throughout the audit engine.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Invalid top-level audit input.
///
/// This is the only error class `audit_page` returns to its caller; everything
/// below input validation is contained and surfaces as default values in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The URL could not be parsed as an absolute URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Parser error description
        reason: String,
    },

    /// The URL parsed but does not use http or https.
    #[error("Unsupported scheme '{scheme}' in URL '{url}'")]
    UnsupportedScheme {
        /// The offending input
        url: String,
        /// The scheme that was found
        scheme: String,
    },

    /// The URL exceeds `MAX_URL_LENGTH`.
    #[error("URL length {length} exceeds the maximum of {max}")]
    UrlTooLong {
        /// Length of the rejected URL
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Failure of a single auxiliary probe.
///
/// Probe errors never leave the probe runner: each one is logged and turned
/// into that probe's negative result.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe exceeded its timeout.
    #[error("Probe timed out after {after_ms}ms")]
    Timeout {
        /// Timeout that was exceeded
        after_ms: u128,
    },

    /// The HTTP request failed before a response was received.
    #[error("HTTP probe error: {0}")]
    Http(#[from] ReqwestError),

    /// The HTTP request completed with a non-200 status.
    #[error("HTTP probe returned status {0}")]
    Status(u16),

    /// The DNS lookup failed.
    #[error("DNS lookup error: {0}")]
    Dns(String),

    /// The probe target could not be derived from the page URL.
    #[error("Invalid probe origin: {0}")]
    InvalidOrigin(String),
}

/// Coarse category of a probe failure, used in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
pub enum ProbeFailureKind {
    /// Timeout (probe-level or transport-level)
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// Non-200 response
    Status,
    /// DNS resolution failure
    Dns,
    /// Anything else
    Other,
}

/// Error types for invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An analytics pattern specification could not be used.
    #[error("Invalid analytics pattern '{spec}': {reason}")]
    InvalidPattern {
        /// The specification as given
        spec: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the page fetch performed by the CLI.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request failed or returned an error status.
    #[error("Page request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The response body exceeded `MAX_RESPONSE_BODY_SIZE`.
    #[error("Response body too large: {size} bytes")]
    BodyTooLarge {
        /// Observed body size
        size: usize,
    },

    /// The body could not be decompressed.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// The URL to fetch was rejected before any request was made.
    #[error(transparent)]
    InvalidUrl(#[from] AuditError),
}

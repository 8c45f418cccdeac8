//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`thiserror`)
//! - Probe failure categorization for logging
//! - Retry strategy configuration for the page fetch
//!
//! Errors are split by how far they travel:
//! - **Audit errors**: invalid top-level input, returned to the caller
//! - **Probe errors**: contained by the probe runner, surfaced only as `false`
//! - **Config/initialization/fetch errors**: raised at the binary boundary

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_probe_error, get_retry_strategy, is_retriable_fetch_error};
pub use types::{
    AuditError, ConfigError, FetchError, InitializationError, ProbeError, ProbeFailureKind,
};

//! Audit configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, estimation factors)
//! - HTTP header name constants
//! - The injected `AuditConfig` and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{
    AnalyticsPattern, AnalyticsPatterns, AuditConfig, LogFormat, LogLevel, Opt, PerformanceModel,
};

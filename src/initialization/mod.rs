//! Shared resource setup for the binary.
//!
//! This module provides functions to initialize:
//! - The HTTP client (page fetch and origin probes)
//! - The DNS resolver (SPF probe)
//! - The logger
//!
//! The library itself never installs a logger; only `main` calls `init_logger_with`.

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

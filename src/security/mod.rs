//! Security and response header analysis.
//!
//! This module derives security signals from the requested URL, the response
//! headers supplied by the fetch, and the page markup:
//! - HTTPS usage
//! - HSTS, `X-Content-Type-Options`, `X-Frame-Options`, CSP headers
//! - Response compression
//! - Mixed content (HTTPS pages only)
//! - `target="_blank"` links without `noopener noreferrer`

mod analysis;
mod types;

pub use analysis::{analyze_security, has_insecure_sub_resources, has_unsafe_cross_links};
pub use types::SecuritySignals;

//! Command-line application helpers.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;

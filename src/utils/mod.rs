//! Utility functions shared by the extractors.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Whitespace normalization and case-insensitive matching for page text

mod selector;
mod text;

pub use selector::parse_selector_with_fallback;
pub use text::{collapse_whitespace, contains_ignore_case};

//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector, logging instead of failing on invalid input.
///
/// Callers treat `None` as "matches nothing", so a bad selector degrades to an
/// empty result set rather than an error.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "snapshot count")
///
/// # Returns
///
/// The parsed `Selector`, or `None` if parsing fails.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' in {}: {}. Treating as matching nothing.",
                selector_str,
                context,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_selector() {
        assert!(parse_selector_with_fallback("meta[name='description']", "test").is_some());
        assert!(parse_selector_with_fallback("head script[src]", "test").is_some());
    }

    #[test]
    fn test_parse_invalid_selector_returns_none() {
        assert!(parse_selector_with_fallback("[[[", "test").is_none());
        assert!(parse_selector_with_fallback("", "test").is_none());
    }
}

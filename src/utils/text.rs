//! Text normalization helpers.

/// Collapses every run of whitespace to a single space and trims both ends.
///
/// # Examples
///
/// ```
/// use page_audit::utils::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Acme \n\t Widgets  "), "Acme Widgets");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive substring test. An empty needle never matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

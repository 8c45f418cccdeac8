//! Body text metrics.

/// Rough token count of already-normalized body text.
///
/// Splits on single spaces; this is a token count, not linguistic word segmentation.
pub fn count_words(normalized_text: &str) -> usize {
    if normalized_text.is_empty() {
        return 0;
    }
    normalized_text.split(' ').count()
}

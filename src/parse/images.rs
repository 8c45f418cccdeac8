//! Image alt-text and format coverage.

use crate::dom::Snapshot;

/// File extensions counted as modern image formats.
const MODERN_IMAGE_EXTENSIONS: &[&str] = &[".webp", ".avif"];

/// Raw image counts; ratios are derived by the report assembler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageStats {
    /// Number of `<img>` elements
    pub total: usize,
    /// Images with a non-empty `alt` attribute
    pub with_alt: usize,
    /// Images whose `src` ends in a modern format extension
    pub modern_format: usize,
}

/// Counts `<img>` elements, their alt-text coverage, and modern-format sources.
///
/// Query strings and fragments are ignored when checking the `src` extension,
/// so `hero.webp?v=2` counts as WebP.
pub fn extract_image_stats(snapshot: &Snapshot) -> ImageStats {
    let mut stats = ImageStats::default();
    for img in snapshot.select("img") {
        stats.total += 1;
        let element = img.value();
        if element.attr("alt").is_some_and(|alt| !alt.trim().is_empty()) {
            stats.with_alt += 1;
        }
        if element.attr("src").is_some_and(is_modern_format) {
            stats.modern_format += 1;
        }
    }
    stats
}

fn is_modern_format(src: &str) -> bool {
    let path = src.split(['?', '#']).next().unwrap_or(src).to_lowercase();
    MODERN_IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

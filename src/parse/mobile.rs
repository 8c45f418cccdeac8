//! Mobile-friendliness indicators.

use crate::dom::{element_text, Snapshot};

const VIEWPORT_SELECTOR: &str = "meta[name='viewport']";
const MEDIA_QUERY_MARKER: &str = "@media";
const MEDIA_ATTRIBUTE_MARKER: &str = "media=";

/// Whether a `<meta name="viewport">` tag is present.
pub fn has_viewport(snapshot: &Snapshot) -> bool {
    snapshot.exists(VIEWPORT_SELECTOR)
}

/// Whether the page shows any sign of responsive CSS.
///
/// True if an inline `<style>` block or a `style` attribute contains `@media`,
/// or the raw HTML uses a `media=` attribute (e.g. on `<link>` or `<source>`).
pub fn has_media_queries(snapshot: &Snapshot, raw_html: &str) -> bool {
    let in_style_blocks = snapshot
        .select("style")
        .iter()
        .any(|style| element_text(style).contains(MEDIA_QUERY_MARKER));
    if in_style_blocks {
        return true;
    }

    let in_style_attributes = snapshot.select("[style]").iter().any(|element| {
        element
            .value()
            .attr("style")
            .is_some_and(|style| style.contains(MEDIA_QUERY_MARKER))
    });

    in_style_attributes || raw_html.contains(MEDIA_ATTRIBUTE_MARKER)
}

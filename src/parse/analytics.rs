//! Analytics and tracking script detection.
//!
//! Detection is driven entirely by the injected `AnalyticsPatterns`; this module
//! only decides what text each pattern is matched against.

use crate::config::AnalyticsPatterns;
use crate::dom::{element_text, Snapshot};

/// Finds the first analytics vendor referenced by the page's scripts.
///
/// Scripts are visited in document order. For each one the `src` attribute is
/// checked first, then the inline script body.
///
/// # Returns
///
/// The vendor name of the first matching pattern, or `None` if no script matches.
pub fn detect_analytics(snapshot: &Snapshot, patterns: &AnalyticsPatterns) -> Option<String> {
    if patterns.is_empty() {
        return None;
    }

    for script in snapshot.select("script") {
        if let Some(vendor) = script
            .value()
            .attr("src")
            .and_then(|src| patterns.find_vendor(src))
        {
            return Some(vendor.to_string());
        }

        let inline = element_text(&script);
        if inline.trim().is_empty() {
            continue;
        }
        if let Some(vendor) = patterns.find_vendor(&inline) {
            return Some(vendor.to_string());
        }
    }
    None
}

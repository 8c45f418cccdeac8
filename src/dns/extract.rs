//! SPF record extraction.

use crate::config::SPF_RECORD_MARKER;

/// Extracts the SPF policy from a set of TXT records.
///
/// A record counts as SPF when it contains `v=spf1`.
///
/// # Arguments
///
/// * `txt_records` - TXT record strings, each already joined from its segments
///
/// # Returns
///
/// The first SPF record found (trimmed), or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.contains(SPF_RECORD_MARKER))
        .map(|s| s.trim().to_string())
}

/// Returns the DNS name whose TXT records hold the site's SPF policy.
///
/// SPF lives on the bare domain, so a leading `www.` is removed.
pub fn spf_lookup_name(host: &str) -> &str {
    match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    }
}

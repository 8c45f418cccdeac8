//! Security analysis functions.

use std::collections::HashMap;

use url::Url;

use super::SecuritySignals;
use crate::config::{
    HEADER_CONTENT_ENCODING, HEADER_CONTENT_SECURITY_POLICY, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};
use crate::dom::Snapshot;

/// Sub-resource selectors and the attribute holding their URL.
const SUB_RESOURCES: &[(&str, &str)] = &[
    ("script[src]", "src"),
    ("link[href]", "href"),
    ("img[src]", "src"),
    ("iframe[src]", "src"),
];

/// Looks a header up by name, case-insensitively.
///
/// `FetchResult` headers are documented as lower-cased, but callers building
/// one by hand may not normalize them.
pub(crate) fn header_value<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .or_else(|| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .map(String::as_str)
}

/// Whether any sub-resource (`script`, `link`, `img`, `iframe`) is loaded over plain HTTP.
pub fn has_insecure_sub_resources(snapshot: &Snapshot) -> bool {
    SUB_RESOURCES.iter().any(|(selector, attr)| {
        snapshot.select(selector).iter().any(|element| {
            element
                .value()
                .attr(attr)
                .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("http://"))
        })
    })
}

/// Whether any `target="_blank"` link is missing `noopener` or `noreferrer`.
///
/// Both tokens must be present in `rel` for a link to count as safe.
pub fn has_unsafe_cross_links(snapshot: &Snapshot) -> bool {
    snapshot.select("a[target='_blank']").iter().any(|link| {
        let rel = link.value().attr("rel").unwrap_or("").to_ascii_lowercase();
        let tokens: Vec<&str> = rel.split_ascii_whitespace().collect();
        !(tokens.contains(&"noopener") && tokens.contains(&"noreferrer"))
    })
}

/// Analyzes the URL scheme, response headers, and page markup for security signals.
///
/// # Arguments
///
/// * `requested_url` - The URL originally requested (its scheme decides HTTPS)
/// * `headers` - Response headers from the fetch, keyed by lower-case name
/// * `snapshot` - The parsed page
///
/// # Returns
///
/// A fully-populated `SecuritySignals`. Mixed content is only evaluated for HTTPS pages.
pub fn analyze_security(
    requested_url: &Url,
    headers: &HashMap<String, String>,
    snapshot: &Snapshot,
) -> SecuritySignals {
    let is_https = requested_url.scheme() == "https";

    let hsts = header_value(headers, HEADER_STRICT_TRANSPORT_SECURITY).is_some();
    let x_content_type_options = header_value(headers, HEADER_X_CONTENT_TYPE_OPTIONS)
        .is_some_and(|value| value.to_ascii_lowercase().contains("nosniff"));
    let x_frame_options = header_value(headers, HEADER_X_FRAME_OPTIONS).is_some();
    let content_security_policy = header_value(headers, HEADER_CONTENT_SECURITY_POLICY).is_some();
    let content_encoding = header_value(headers, HEADER_CONTENT_ENCODING)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let mixed_content = is_https && has_insecure_sub_resources(snapshot);

    SecuritySignals {
        is_https,
        hsts,
        x_content_type_options,
        x_frame_options,
        content_security_policy,
        content_encoding,
        mixed_content,
        unsafe_cross_links: has_unsafe_cross_links(snapshot),
    }
}

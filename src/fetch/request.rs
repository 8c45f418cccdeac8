//! Page request building.

/// Browser-like request headers for the page fetch.
///
/// Mimics a modern Chrome navigation so sites serve the same HTML a visitor
/// would get. `Accept-Encoding` is limited to gzip, which the response
/// decoder handles itself so the `content-encoding` header stays visible.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

    /// Returns the headers as (name, value) pairs.
    pub(crate) fn as_vec() -> Vec<(&'static str, &'static str)> {
        vec![
            ("accept", Self::ACCEPT),
            ("accept-language", "en-US,en;q=0.9"),
            ("accept-encoding", "gzip"),
            ("sec-fetch-dest", "document"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-site", "none"),
            ("sec-fetch-user", "?1"),
            ("upgrade-insecure-requests", "1"),
            ("cache-control", "max-age=0"),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        Self::as_vec()
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }
}

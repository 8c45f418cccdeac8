//! Security and header signal types.

/// Signals derived from the URL scheme, response headers, and sub-resource URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecuritySignals {
    /// Requested URL uses `https`
    pub is_https: bool,
    /// `strict-transport-security` header present
    pub hsts: bool,
    /// `x-content-type-options` header contains `nosniff`
    pub x_content_type_options: bool,
    /// `x-frame-options` header present
    pub x_frame_options: bool,
    /// `content-security-policy` header present
    pub content_security_policy: bool,
    /// Non-empty `content-encoding` header value
    pub content_encoding: Option<String>,
    /// HTTPS page loads a sub-resource over `http://` (always false for HTTP pages)
    pub mixed_content: bool,
    /// Some `target="_blank"` link lacks `noopener` or `noreferrer`
    pub unsafe_cross_links: bool,
}

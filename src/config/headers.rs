//! HTTP header name constants.
//!
//! Header names are lower-case because `FetchResult::headers` is keyed by
//! lower-cased names.

/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// Content-Encoding header (response compression)
pub const HEADER_CONTENT_ENCODING: &str = "content-encoding";

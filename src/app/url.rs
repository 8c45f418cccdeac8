//! URL validation and normalization for the command-line argument.

use crate::audit::validate_input_url;
use crate::error_handling::AuditError;

/// Validates and normalizes a URL typed on the command line.
///
/// Trims surrounding whitespace and adds an `https://` prefix when no scheme
/// is given, then applies the same checks as the audit input: absolute URL,
/// http/https scheme, at most `MAX_URL_LENGTH` characters after normalization.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// The normalized URL string (not re-serialized, so the input's shape is kept).
///
/// # Errors
///
/// Returns the `AuditError` describing why the URL was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<String, AuditError> {
    let url = url.trim();

    if let Some((scheme, _)) = url.split_once("://") {
        let looks_like_scheme =
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c));
        if looks_like_scheme
            && !scheme.eq_ignore_ascii_case("http")
            && !scheme.eq_ignore_ascii_case("https")
        {
            log::warn!("Rejecting unsupported scheme for URL: {url}");
            return Err(AuditError::UnsupportedScheme {
                url: url.to_string(),
                scheme: scheme.to_ascii_lowercase(),
            });
        }
    }

    let has_http_scheme = url.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || url.get(..8).is_some_and(|p| p.eq_ignore_ascii_case("https://"));
    let normalized = if has_http_scheme {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    validate_input_url(&normalized)?;
    Ok(normalized)
}

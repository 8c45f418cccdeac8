//! Site identity keyword heuristic.
//!
//! This is an approximate branding check, not keyword-density analysis: the
//! "keyword" is the first label of the host name (`www.acme.co.uk` → `acme`),
//! looked up case-insensitively in the title, the `<h1>` headings, and the body text.

use url::Url;

use crate::utils::contains_ignore_case;

/// Result of the identity-token lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSignals {
    /// The site identity token (empty when the URL has no host)
    pub token: String,
    /// Token appears in the title or in any `<h1>`
    pub found_in_title_or_h1: bool,
    /// Token appears in the normalized body text
    pub found_in_content: bool,
}

/// Derives the site identity token from a URL's host name.
///
/// Strips a leading `www.` and keeps everything before the first dot.
///
/// # Examples
///
/// ```
/// use page_audit::parse::site_identity_token;
/// use url::Url;
///
/// let url = Url::parse("https://www.acme.com/widgets").unwrap();
/// assert_eq!(site_identity_token(&url), "acme");
/// ```
pub fn site_identity_token(url: &Url) -> String {
    let host = url.host_str().unwrap_or("").to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    host.split('.').next().unwrap_or("").to_string()
}

/// Looks the identity token up in the title, `<h1>` texts, and body text.
pub fn match_keywords(
    url: &Url,
    title: &str,
    h1_texts: &[String],
    body_text: &str,
) -> KeywordSignals {
    let token = site_identity_token(url);
    let found_in_title_or_h1 = contains_ignore_case(title, &token)
        || h1_texts.iter().any(|h1| contains_ignore_case(h1, &token));
    let found_in_content = contains_ignore_case(body_text, &token);

    KeywordSignals {
        token,
        found_in_title_or_h1,
        found_in_content,
    }
}

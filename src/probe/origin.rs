//! Probe target derivation.

use std::fmt;

use url::Url;

use crate::dns::spf_lookup_name;
use crate::error_handling::ProbeError;

/// The origin every probe targets, derived from the post-redirect page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOrigin {
    base: Url,
    spf_name: String,
}

impl ProbeOrigin {
    /// Derives the probe origin (scheme, host, port) from a page URL.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidOrigin` if the URL has no host.
    pub fn from_url(page_url: &Url) -> Result<Self, ProbeError> {
        let host = page_url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ProbeError::InvalidOrigin(format!("no host in {page_url}")))?;

        let mut base = page_url.clone();
        base.set_path("/");
        base.set_query(None);
        base.set_fragment(None);
        // Credentials never reach the probes
        let _ = base.set_username("");
        let _ = base.set_password(None);

        Ok(Self {
            spf_name: spf_lookup_name(host).to_ascii_lowercase(),
            base,
        })
    }

    /// Absolute URL of a well-known path on this origin.
    pub fn url_for(&self, path: &str) -> Result<Url, ProbeError> {
        self.base
            .join(path)
            .map_err(|e| ProbeError::InvalidOrigin(format!("cannot join {path}: {e}")))
    }

    /// DNS name queried for the SPF policy (host without a leading `www.`).
    pub fn spf_name(&self) -> &str {
        &self.spf_name
    }
}

impl fmt::Display for ProbeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base.as_str().trim_end_matches('/'))
    }
}

//! SPF probe and the DNS seam it runs through.

use std::future::Future;

use hickory_resolver::TokioAsyncResolver;

use crate::dns::{extract_spf_record, lookup_txt_records};
use crate::error_handling::ProbeError;

/// Source of DNS TXT records.
///
/// Implemented for `TokioAsyncResolver`; tests substitute resolvers that fail or stall.
pub trait TxtLookup: Send + Sync {
    /// Returns every TXT record for `name`, each joined from its segments.
    fn lookup_txt(&self, name: &str) -> impl Future<Output = Result<Vec<String>, ProbeError>> + Send;
}

impl TxtLookup for TokioAsyncResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, ProbeError> {
        lookup_txt_records(name, self).await
    }
}

/// Looks up the TXT records for `name` and reports whether any holds an SPF policy.
///
/// # Errors
///
/// Returns the resolver's error unchanged; a domain without TXT records is `Ok(false)`.
pub async fn probe_spf<R>(resolver: &R, name: &str) -> Result<bool, ProbeError>
where
    R: TxtLookup + ?Sized,
{
    let records = resolver.lookup_txt(name).await?;
    let spf = extract_spf_record(&records);
    if let Some(policy) = &spf {
        log::debug!("SPF policy for {name}: {policy}");
    }
    Ok(spf.is_some())
}

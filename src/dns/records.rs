//! DNS TXT record queries.

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ProbeError;

/// Queries TXT (text) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings, or an empty vector when the domain has no
/// TXT records. Timeouts and network failures are returned as `ProbeError::Dns`.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ProbeError> {
    match resolver.lookup(domain, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // TXT records can contain multiple strings - join them
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) => {
            // NXDOMAIN and empty answers are a valid "no records" result
            if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                log::debug!("No TXT records for {domain}");
                Ok(Vec::new())
            } else {
                log::debug!("Failed to lookup TXT records for {domain}: {e}");
                Err(ProbeError::Dns(e.to_string()))
            }
        }
    }
}

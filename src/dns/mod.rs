//! DNS record querying.
//!
//! This module provides the async TXT lookup used by the SPF probe, built on
//! `hickory-resolver`, and helpers to pick SPF policies out of TXT records.

mod extract;
mod records;

// Re-export public API
pub use extract::{extract_spf_record, spf_lookup_name};
pub use records::lookup_txt_records;

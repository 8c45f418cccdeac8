//! Auxiliary origin probes.
//!
//! Four independent checks run against the page's origin:
//! - `robots.txt` (GET, exists on 200)
//! - `sitemap.xml` (HEAD, exists on 200)
//! - `ads.txt` (GET, exists on 200)
//! - SPF policy (DNS TXT lookup on the bare host)
//!
//! Each probe has its own timeout. A failed, stalled, or non-200 probe only
//! sets its own result to `false`; nothing here returns an error to the caller.

mod http;
mod origin;
mod runner;
mod spf;

// Re-export public API
pub use http::{probe_get, probe_head};
pub use origin::ProbeOrigin;
pub use runner::{run_probes, ProbeResults};
pub use spf::{probe_spf, TxtLookup};

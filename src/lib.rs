//! page_audit library: single-page SEO and technical signal auditing
//!
//! This library audits one already-fetched web page and produces a fixed-schema
//! report covering on-page structure, security headers, mobile friendliness,
//! estimated performance, and crawlability probes against the page's origin.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use page_audit::initialization::{init_client, init_resolver};
//! use page_audit::{AuditConfig, AuditInput, Auditor, FetchResult};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(std::time::Duration::from_secs(10), "page_audit")?;
//! let auditor = Auditor::new(client, init_resolver(), AuditConfig::default());
//!
//! let input = AuditInput {
//!     requested_url: "https://acme.com".to_string(),
//!     html: "<html><head><title>Acme Widgets</title></head></html>".to_string(),
//!     fetch: FetchResult {
//!         final_url: "https://acme.com/".to_string(),
//!         headers: HashMap::new(),
//!         fetch_duration_ms: 420.0,
//!     },
//! };
//!
//! let report = auditor.audit(&input).await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Audits run the origin probes on Tokio. Use `#[tokio::main]` in your application
//! or call the audit functions from within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod audit;
pub mod config;
pub mod dns;
pub mod dom;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
pub mod performance;
pub mod probe;
pub mod report;
pub mod security;
pub mod utils;

// Re-export public API
pub use audit::{audit_page, AuditInput, Auditor, FetchResult};
pub use config::{AuditConfig, LogFormat, LogLevel, Opt};
pub use error_handling::AuditError;
pub use report::AuditReport;
pub use run::run_audit;

// Fetch-then-audit flow behind the command-line binary
mod run {
    use std::time::Duration;

    use anyhow::{Context, Result};

    use crate::app::validate_and_normalize_url;
    use crate::audit::{AuditInput, Auditor};
    use crate::config::Opt;
    use crate::fetch::fetch_page;
    use crate::initialization::{init_client, init_resolver};
    use crate::report::AuditReport;

    /// Fetches the page named by the options and audits it.
    ///
    /// # Arguments
    ///
    /// * `opt` - Parsed command-line options
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The URL or an `--analytics-pattern` is invalid
    /// - The HTTP client cannot be built
    /// - The page fetch fails after retries
    ///
    /// Probe failures never surface here; they only show up as `false` in the report.
    pub async fn run_audit(opt: &Opt) -> Result<AuditReport> {
        let url = validate_and_normalize_url(&opt.url).context("Invalid URL argument")?;
        let config = opt
            .audit_config()
            .context("Invalid analytics pattern configuration")?;

        let client = init_client(Duration::from_secs(opt.timeout_seconds), &opt.user_agent)
            .context("Failed to initialize HTTP client")?;
        let resolver = init_resolver();

        let (html, fetch) = fetch_page(&client, &url)
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        let auditor = Auditor::new(client, resolver, config);
        let report = auditor
            .audit(&AuditInput {
                requested_url: url,
                html,
                fetch,
            })
            .await
            .context("Audit rejected the fetched page")?;
        Ok(report)
    }
}

//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the audit engine,
//! including probe timeouts, size limits, and the performance estimation factors.

use std::time::Duration;

// Auxiliary probes
/// Per-probe timeout in milliseconds (robots.txt, sitemap.xml, ads.txt, SPF lookup)
pub const PROBE_TIMEOUT_MS: u64 = 3000;
/// Default per-probe timeout as a `Duration`
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(PROBE_TIMEOUT_MS);
/// Well-known path probed for crawl directives
pub const ROBOTS_TXT_PATH: &str = "/robots.txt";
/// Well-known path probed for the XML sitemap
pub const SITEMAP_XML_PATH: &str = "/sitemap.xml";
/// Well-known path probed for authorized digital sellers
pub const ADS_TXT_PATH: &str = "/ads.txt";
/// Prefix that identifies an SPF policy inside a TXT record
pub const SPF_RECORD_MARKER: &str = "v=spf1";

// Network operation timeouts
/// DNS query timeout in seconds
/// Kept equal to the probe budget so the resolver gives up no later than the probe does
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// DNS attempts per query
pub const DNS_ATTEMPTS: usize = 2;
/// Page fetch timeout in seconds (CLI fetch only)
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a modern Chrome browser on Windows. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Performance estimation
// These are coarse multiples of the total fetch duration, not measurements.
/// Estimated time to first byte as a fraction of the fetch duration
pub const TTFB_FACTOR: f64 = 0.4;
/// Estimated first contentful paint as a multiple of the fetch duration
pub const FCP_FACTOR: f64 = 1.5;
/// Estimated largest contentful paint as a multiple of the fetch duration
pub const LCP_FACTOR: f64 = 2.0;
/// Nominal cumulative layout shift reported for every page
pub const NOMINAL_CLS: f64 = 0.05;

// Core Web Vitals "good" thresholds, applied to the estimates above
/// First contentful paint threshold in seconds
pub const FCP_GOOD_SECONDS: f64 = 1.8;
/// Largest contentful paint threshold in seconds
pub const LCP_GOOD_SECONDS: f64 = 2.5;
/// Cumulative layout shift threshold
pub const CLS_GOOD: f64 = 0.1;

// Retry strategy (CLI fetch only)
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Maximum number of retries after the initial attempt
pub const RETRY_MAX_ATTEMPTS: usize = 2;

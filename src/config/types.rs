//! Configuration types and CLI options.
//!
//! This module defines the injected audit configuration (analytics vendor
//! patterns, probe timeout, performance model) and the command-line options
//! of the `page_audit` binary.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use regex::Regex;

use crate::config::constants::{
    DEFAULT_USER_AGENT, FCP_FACTOR, FETCH_TIMEOUT_SECS, LCP_FACTOR, NOMINAL_CLS, PROBE_TIMEOUT,
    PROBE_TIMEOUT_MS, TTFB_FACTOR,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Vendor name and regex pairs shipped as the default analytics detection list.
///
/// Matching is attempted against every script `src` and inline script body.
const DEFAULT_ANALYTICS_PATTERNS: &[(&str, &str)] = &[
    (
        "Google Analytics",
        r"(?i)google-analytics\.com|googletagmanager\.com/gtag/|\bgtag\s*\(",
    ),
    (
        "Google Tag Manager",
        r"(?i)googletagmanager\.com/gtm\.js|\bGTM-[A-Z0-9]{4,}\b",
    ),
    ("Facebook Pixel", r"(?i)connect\.facebook\.net|\bfbq\s*\("),
    ("Hotjar", r"(?i)static\.hotjar\.com|\bhotjar\b"),
    ("Matomo", r"(?i)\bmatomo\b|\bpiwik\b|_paq\.push"),
    ("Plausible", r"(?i)plausible\.io"),
    ("Segment", r"(?i)cdn\.segment\.(?:com|io)"),
    ("Microsoft Clarity", r"(?i)clarity\.ms"),
    ("Mixpanel", r"(?i)\bmixpanel\b"),
];

/// A single analytics vendor detection rule.
#[derive(Debug, Clone)]
pub struct AnalyticsPattern {
    /// Human-readable vendor name reported when the pattern matches
    pub vendor: String,
    /// Pattern matched against script sources and inline script text
    pub regex: Regex,
}

/// Ordered list of analytics vendor patterns.
///
/// The first pattern that matches a script wins, so more specific vendors should
/// come first.
#[derive(Debug, Clone)]
pub struct AnalyticsPatterns {
    patterns: Vec<AnalyticsPattern>,
}

impl AnalyticsPatterns {
    /// Creates a pattern list from already-compiled rules.
    pub fn new(patterns: Vec<AnalyticsPattern>) -> Self {
        Self { patterns }
    }

    /// Builds a pattern list from `NAME=REGEX` specifications.
    ///
    /// The split happens at the first `=`, so the regex itself may contain `=`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if a specification has no `=`, an
    /// empty vendor name, an empty regex, or a regex that fails to compile.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for spec in specs {
            let spec = spec.as_ref();
            let (vendor, pattern) = spec.split_once('=').ok_or_else(|| ConfigError::InvalidPattern {
                spec: spec.to_string(),
                reason: "expected NAME=REGEX".to_string(),
            })?;
            let vendor = vendor.trim();
            if vendor.is_empty() || pattern.is_empty() {
                return Err(ConfigError::InvalidPattern {
                    spec: spec.to_string(),
                    reason: "vendor name and regex must both be non-empty".to_string(),
                });
            }
            let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                spec: spec.to_string(),
                reason: e.to_string(),
            })?;
            patterns.push(AnalyticsPattern {
                vendor: vendor.to_string(),
                regex,
            });
        }
        Ok(Self { patterns })
    }

    /// Returns the vendor name of the first pattern matching `haystack`.
    pub fn find_vendor(&self, haystack: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.regex.is_match(haystack))
            .map(|p| p.vendor.as_str())
    }

    /// Number of configured patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are configured (analytics detection always reports `false`).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for AnalyticsPatterns {
    fn default() -> Self {
        let patterns = DEFAULT_ANALYTICS_PATTERNS
            .iter()
            .filter_map(|(vendor, pattern)| match Regex::new(pattern) {
                Ok(regex) => Some(AnalyticsPattern {
                    vendor: (*vendor).to_string(),
                    regex,
                }),
                Err(e) => {
                    log::error!("Failed to compile analytics pattern for {}: {}", vendor, e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }
}

/// Multipliers used to derive timing proxies from the total fetch duration.
///
/// These are heuristic placeholders with no empirical basis; they exist so the
/// report carries numbers in the familiar Core Web Vitals shape. They are not
/// measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceModel {
    /// TTFB = duration × this factor
    pub ttfb_factor: f64,
    /// FCP = duration × this factor
    pub fcp_factor: f64,
    /// LCP = duration × this factor
    pub lcp_factor: f64,
    /// CLS reported for every page
    pub nominal_cls: f64,
}

impl Default for PerformanceModel {
    fn default() -> Self {
        Self {
            ttfb_factor: TTFB_FACTOR,
            fcp_factor: FCP_FACTOR,
            lcp_factor: LCP_FACTOR,
            nominal_cls: NOMINAL_CLS,
        }
    }
}

/// Audit engine configuration.
///
/// # Examples
///
/// ```
/// use page_audit::AuditConfig;
/// use std::time::Duration;
///
/// let config = AuditConfig {
///     probe_timeout: Duration::from_millis(1500),
///     ..Default::default()
/// };
/// assert!(!config.analytics.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Timeout applied to each auxiliary probe individually
    pub probe_timeout: Duration,
    /// Analytics vendor detection rules
    pub analytics: AnalyticsPatterns,
    /// Factors for the timing estimates
    pub performance: PerformanceModel,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            probe_timeout: PROBE_TIMEOUT,
            analytics: AnalyticsPatterns::default(),
            performance: PerformanceModel::default(),
        }
    }
}

/// Command-line options for the `page_audit` binary.
///
/// # Examples
///
/// ```bash
/// # Audit a page and print the report as pretty JSON
/// page_audit https://example.com
///
/// # Tighter probe budget and a custom analytics vendor list
/// page_audit example.com --probe-timeout-ms 1000 \
///     --analytics-pattern 'Plausible=plausible\.io' \
///     --analytics-pattern 'Fathom=cdn\.usefathom\.com'
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "page_audit",
    about = "Audits a single web page and prints an SEO signal report as JSON."
)]
pub struct Opt {
    /// URL of the page to audit (https:// is assumed when no scheme is given)
    #[arg(value_parser)]
    pub url: String,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Timeout for each auxiliary probe (robots.txt, sitemap.xml, ads.txt, SPF) in milliseconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_MS)]
    pub probe_timeout_ms: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Analytics vendor rule as NAME=REGEX (repeatable; replaces the built-in list)
    #[arg(long = "analytics-pattern", value_name = "NAME=REGEX")]
    pub analytics_patterns: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print the report as single-line JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

impl Opt {
    /// Builds the audit configuration described by the command-line flags.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if any `--analytics-pattern` is malformed.
    pub fn audit_config(&self) -> Result<AuditConfig, ConfigError> {
        let analytics = if self.analytics_patterns.is_empty() {
            AnalyticsPatterns::default()
        } else {
            AnalyticsPatterns::from_specs(&self.analytics_patterns)?
        };
        Ok(AuditConfig {
            probe_timeout: Duration::from_millis(self.probe_timeout_ms),
            analytics,
            performance: PerformanceModel::default(),
        })
    }
}

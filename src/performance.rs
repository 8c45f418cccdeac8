//! Performance estimation.
//!
//! Estimates are fixed multiples of the total fetch duration supplied by the
//! caller. No rendering happens, so these are heuristics and the report marks
//! them as estimated.

use crate::config::{PerformanceModel, CLS_GOOD, FCP_GOOD_SECONDS, LCP_GOOD_SECONDS};

/// Timing estimates derived from a single fetch duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceEstimate {
    /// Fetch duration the estimates are based on, in milliseconds
    pub fetch_duration_ms: f64,
    /// Estimated time to first byte, in seconds
    pub ttfb_seconds: f64,
    /// Estimated first contentful paint, in seconds
    pub fcp_seconds: f64,
    /// Estimated largest contentful paint, in seconds
    pub lcp_seconds: f64,
    /// Nominal cumulative layout shift
    pub cls: f64,
}

impl PerformanceEstimate {
    /// FCP estimate is within the "good" Core Web Vitals threshold.
    pub fn fcp_good(&self) -> bool {
        self.fcp_seconds <= FCP_GOOD_SECONDS
    }

    /// LCP estimate is within the "good" Core Web Vitals threshold.
    pub fn lcp_good(&self) -> bool {
        self.lcp_seconds <= LCP_GOOD_SECONDS
    }

    /// CLS value is within the "good" Core Web Vitals threshold.
    pub fn cls_good(&self) -> bool {
        self.cls <= CLS_GOOD
    }
}

/// Estimates page timings from the fetch duration.
///
/// Negative or non-finite durations are treated as zero. Every estimate is
/// monotonically non-decreasing in the duration.
///
/// # Arguments
///
/// * `fetch_duration_ms` - Wall-clock duration of the page fetch in milliseconds
/// * `model` - Multipliers applied to the duration
pub fn estimate_performance(fetch_duration_ms: f64, model: &PerformanceModel) -> PerformanceEstimate {
    let duration_ms = if fetch_duration_ms.is_finite() && fetch_duration_ms > 0.0 {
        fetch_duration_ms
    } else {
        0.0
    };
    let seconds = duration_ms / 1000.0;

    PerformanceEstimate {
        fetch_duration_ms: duration_ms,
        ttfb_seconds: seconds * model.ttfb_factor,
        fcp_seconds: seconds * model.fcp_factor,
        lcp_seconds: seconds * model.lcp_factor,
        cls: model.nominal_cls,
    }
}

//! Check for suffixes that histograms and summaries reserve.
//!
//! A histogram exposes `_bucket`, `_count` and `_sum` series; a summary
//! exposes `_count` and `_sum`. Other metrics using those suffixes collide
//! with them in queries.

use promlinter_core::{MetricCheck, MetricDescriptor, MetricKind, Problem};

/// Check code for histogram-summary-reserved.
pub const CODE: &str = "PL004";

/// Check name for histogram-summary-reserved.
pub const NAME: &str = "histogram-summary-reserved";

/// Forbids reserved suffixes on the wrong metric kinds.
#[derive(Debug, Clone, Default)]
pub struct HistogramSummaryReserved;

impl HistogramSummaryReserved {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for HistogramSummaryReserved {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "_bucket, _count and _sum suffixes are reserved for histograms and summaries"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        if metric.kind == MetricKind::Untyped {
            return Vec::new();
        }

        let is_histogram = metric.kind == MetricKind::Histogram;
        let is_summary = metric.kind == MetricKind::Summary;
        let name = &metric.name;
        let mut problems = Vec::new();

        if !is_histogram && name.ends_with("_bucket") {
            problems.push(Problem::new(
                metric,
                "non-histogram metrics should not have \"_bucket\" suffix",
            ));
        }
        if !is_histogram && !is_summary && name.ends_with("_count") {
            problems.push(Problem::new(
                metric,
                "non-histogram and non-summary metrics should not have \"_count\" suffix",
            ));
        }
        if !is_histogram && !is_summary && name.ends_with("_sum") {
            problems.push(Problem::new(
                metric,
                "non-histogram and non-summary metrics should not have \"_sum\" suffix",
            ));
        }

        problems
    }
}

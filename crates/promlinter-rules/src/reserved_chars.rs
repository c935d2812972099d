//! Check for colons in metric names.
//!
//! Colons are reserved for recording rules.

use promlinter_core::{MetricCheck, MetricDescriptor, Problem};

/// Check code for reserved-chars.
pub const CODE: &str = "PL006";

/// Check name for reserved-chars.
pub const NAME: &str = "reserved-chars";

/// Forbids `:` in metric names.
#[derive(Debug, Clone, Default)]
pub struct ReservedChars;

impl ReservedChars {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for ReservedChars {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Metric names must not contain ':'"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        if metric.name.contains(':') {
            vec![Problem::new(metric, "metric names should not contain ':'")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promlinter_core::MetricKind;

    #[test]
    fn test_detects_colon() {
        let m = MetricDescriptor::new(MetricKind::Gauge, "job:up:sum", "h");
        assert_eq!(ReservedChars::new().check(&m).len(), 1);
    }

    #[test]
    fn test_accepts_plain_name() {
        let m = MetricDescriptor::new(MetricKind::Gauge, "job_up", "h");
        assert!(ReservedChars::new().check(&m).is_empty());
    }
}

//! Check that every metric documents itself.
//!
//! # Rationale
//!
//! Help text is the only description a metric carries into dashboards and
//! alerting rules. A metric without it forces readers back to the source.

use promlinter_core::{MetricCheck, MetricDescriptor, Problem};

/// Check code for help.
pub const CODE: &str = "PL001";

/// Check name for help.
pub const NAME: &str = "help";

/// Requires non-empty help text.
#[derive(Debug, Clone, Default)]
pub struct RequireHelp;

impl RequireHelp {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for RequireHelp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Metrics must have help text"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        if metric.help.is_empty() {
            vec![Problem::new(metric, "no help text")]
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
    fn test_detects_missing_help() {
        let m = MetricDescriptor::new(MetricKind::Gauge, "queue_length", "");
        let problems = RequireHelp::new().check(&m);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].text, "no help text");
        assert_eq!(problems[0].metric, "queue_length");
    }

    #[test]
    fn test_accepts_help() {
        let m = MetricDescriptor::new(MetricKind::Gauge, "queue_length", "Items waiting.");
        assert!(RequireHelp::new().check(&m).is_empty());
    }
}

//! Check the `_total` suffix convention for counters.
//!
//! Counters end in `_total`; nothing else does. Untyped metrics are exempt
//! because their kind is unknown.

use promlinter_core::{MetricCheck, MetricDescriptor, MetricKind, Problem};

/// Check code for counter.
pub const CODE: &str = "PL003";

/// Check name for counter.
pub const NAME: &str = "counter";

/// Enforces the `_total` suffix for counters only.
#[derive(Debug, Clone, Default)]
pub struct CounterSuffix;

impl CounterSuffix {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for CounterSuffix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Counters must end in _total, other metrics must not"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        let is_counter = metric.kind == MetricKind::Counter;
        let is_untyped = metric.kind == MetricKind::Untyped;
        let has_total_suffix = metric.name.ends_with("_total");

        match (is_counter, is_untyped, has_total_suffix) {
            (true, _, false) => vec![Problem::new(
                metric,
                "counter metrics should have \"_total\" suffix",
            )],
            (false, false, true) => vec![Problem::new(
                metric,
                "non-counter metrics should not have \"_total\" suffix",
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: MetricKind, name: &str) -> Vec<Problem> {
        CounterSuffix::new().check(&MetricDescriptor::new(kind, name, "help"))
    }

    #[test]
    fn test_counter_without_suffix() {
        let problems = check(MetricKind::Counter, "http_requests");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].text.starts_with("counter metrics"));
    }

    #[test]
    fn test_gauge_with_suffix() {
        let problems = check(MetricKind::Gauge, "open_files_total");
        assert_eq!(problems.len(), 1);
        assert!(problems[0].text.starts_with("non-counter"));
    }

    #[test]
    fn test_untyped_is_exempt() {
        assert!(check(MetricKind::Untyped, "things_total").is_empty());
        assert!(check(MetricKind::Untyped, "things").is_empty());
    }

    #[test]
    fn test_well_named() {
        assert!(check(MetricKind::Counter, "http_requests_total").is_empty());
        assert!(check(MetricKind::Histogram, "request_duration_seconds").is_empty());
    }
}

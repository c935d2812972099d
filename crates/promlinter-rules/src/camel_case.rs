//! Check that metric names are snake_case.

use promlinter_core::{MetricCheck, MetricDescriptor, Problem};
use regex::Regex;
use std::sync::LazyLock;

/// Check code for camel-case.
pub const CODE: &str = "PL007";

/// Check name for camel-case.
pub const NAME: &str = "camel-case";

static CAMEL_CASE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[a-z][A-Z]").ok());

/// Forbids a lowercase letter followed by an uppercase one.
#[derive(Debug, Clone, Default)]
pub struct CamelCase;

impl CamelCase {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for CamelCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Metric names must be snake_case"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        let Some(re) = CAMEL_CASE.as_ref() else {
            return Vec::new();
        };
        if re.is_match(&metric.name) {
            vec![Problem::new(
                metric,
                "metric names should be written in 'snake_case' not 'camelCase'",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promlinter_core::MetricKind;

    fn check(name: &str) -> Vec<Problem> {
        CamelCase::new().check(&MetricDescriptor::new(MetricKind::Gauge, name, "h"))
    }

    #[test]
    fn test_detects_camel_case() {
        assert_eq!(check("requestLatency").len(), 1);
    }

    #[test]
    fn test_leading_capital_is_not_camel_case() {
        // Only a lower-to-upper transition counts.
        assert!(check("Requests").is_empty());
        assert!(check("request_latency").is_empty());
    }
}

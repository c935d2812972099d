//! Check that metric names do not repeat their own type.

use promlinter_core::{MetricCheck, MetricDescriptor, MetricKind, Problem};

/// Check code for metric-type-in-name.
pub const CODE: &str = "PL005";

/// Check name for metric-type-in-name.
pub const NAME: &str = "metric-type-in-name";

/// Forbids `_counter`, `_gauge`, ... as a name segment matching the metric's kind.
#[derive(Debug, Clone, Default)]
pub struct MetricTypeInName;

impl MetricTypeInName {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for MetricTypeInName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Metric names must not include their type"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        if metric.kind == MetricKind::Untyped {
            return Vec::new();
        }

        let name = metric.name.to_lowercase();
        let type_name = metric.kind.as_str();
        let segment = format!("_{type_name}");

        if name.contains(&format!("{segment}_")) || name.ends_with(&segment) {
            vec![Problem::new(
                metric,
                format!("metric name should not include type '{type_name}'"),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: MetricKind, name: &str) -> Vec<Problem> {
        MetricTypeInName::new().check(&MetricDescriptor::new(kind, name, "h"))
    }

    #[test]
    fn test_detects_type_suffix() {
        let problems = check(MetricKind::Gauge, "temperature_gauge");
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].text, "metric name should not include type 'gauge'");
    }

    #[test]
    fn test_detects_type_in_middle() {
        assert_eq!(check(MetricKind::Counter, "app_counter_total").len(), 1);
    }

    #[test]
    fn test_other_type_names_are_fine() {
        assert!(check(MetricKind::Gauge, "histogram_buckets").is_empty());
        assert!(check(MetricKind::Untyped, "x_untyped").is_empty());
    }
}

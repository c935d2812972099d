//! Check for abbreviated units such as `_ms` or `_kb`.

use promlinter_core::{MetricCheck, MetricDescriptor, Problem};

/// Check code for unit-abbreviations.
pub const CODE: &str = "PL008";

/// Check name for unit-abbreviations.
pub const NAME: &str = "unit-abbreviations";

const UNIT_ABBREVIATIONS: &[&str] = &[
    "s", "ms", "us", "ns", "sec", "b", "kb", "mb", "gb", "tb", "pb", "m", "h", "d",
];

/// Forbids abbreviated unit segments. Reports once per matching abbreviation.
#[derive(Debug, Clone, Default)]
pub struct UnitAbbreviations;

impl UnitAbbreviations {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for UnitAbbreviations {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Metric names must spell out units"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        let name = metric.name.to_lowercase();
        UNIT_ABBREVIATIONS
            .iter()
            .filter(|abbr| {
                name.contains(&format!("_{abbr}_")) || name.ends_with(&format!("_{abbr}"))
            })
            .map(|_| Problem::new(metric, "metric names should not contain abbreviated units"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promlinter_core::MetricKind;

    fn check(name: &str) -> Vec<Problem> {
        UnitAbbreviations::new().check(&MetricDescriptor::new(MetricKind::Gauge, name, "h"))
    }

    #[test]
    fn test_detects_suffix_abbreviation() {
        assert_eq!(check("request_latency_ms").len(), 1);
    }

    #[test]
    fn test_detects_inner_abbreviation() {
        assert_eq!(check("cache_kb_used").len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(check("payload_MB").len(), 1);
    }

    #[test]
    fn test_one_problem_per_abbreviation() {
        assert_eq!(check("x_s_ms").len(), 2);
    }

    #[test]
    fn test_spelled_out_units() {
        assert!(check("request_latency_seconds").is_empty());
        assert!(check("sessions").is_empty());
    }
}

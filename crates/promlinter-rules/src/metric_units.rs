//! Check that metric names use base units.
//!
//! # Rationale
//!
//! Mixing `milliseconds` and `seconds` across metrics makes every query
//! that combines them error-prone. Prometheus convention is base units:
//! seconds, bytes, meters, and so on.

use promlinter_core::{MetricCheck, MetricDescriptor, Problem};

/// Check code for metric-units.
pub const CODE: &str = "PL002";

/// Check name for metric-units.
pub const NAME: &str = "metric-units";

/// Unit name to its base unit. Base units map to themselves.
const UNITS: &[(&str, &str)] = &[
    ("amperes", "amperes"),
    ("bytes", "bytes"),
    ("celsius", "celsius"),
    ("grams", "grams"),
    ("joules", "joules"),
    ("kelvin", "kelvin"),
    ("meters", "meters"),
    ("metres", "metres"),
    ("seconds", "seconds"),
    ("volts", "volts"),
    // time
    ("minutes", "seconds"),
    ("hours", "seconds"),
    ("days", "seconds"),
    ("weeks", "seconds"),
    // temperature
    ("kelvins", "kelvin"),
    ("fahrenheit", "celsius"),
    ("rankine", "celsius"),
    // length
    ("inches", "meters"),
    ("yards", "meters"),
    ("miles", "meters"),
    // information
    ("bits", "bytes"),
    // energy
    ("calories", "joules"),
    // mass
    ("pounds", "grams"),
    ("ounces", "grams"),
];

const UNIT_PREFIXES: &[&str] = &[
    "pico", "nano", "micro", "milli", "centi", "deci", "deca", "hecto", "kilo", "kibi", "mega",
    "mibi", "giga", "gibi", "tera", "tebi", "peta", "pebi",
];

fn base_unit(unit: &str) -> Option<&'static str> {
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, base)| *base)
}

/// Finds the first `_`-separated segment naming a unit, possibly prefixed.
///
/// Returns the segment as written and its base unit.
fn metric_unit(name: &str) -> Option<(&str, &'static str)> {
    for segment in name.split('_') {
        if let Some(base) = base_unit(segment) {
            return Some((segment, base));
        }
        for prefix in UNIT_PREFIXES {
            if let Some(rest) = segment.strip_prefix(prefix) {
                if let Some(base) = base_unit(rest) {
                    return Some((segment, base));
                }
            }
        }
    }
    None
}

/// Requires base units in metric names.
#[derive(Debug, Clone, Default)]
pub struct MetricUnits;

impl MetricUnits {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetricCheck for MetricUnits {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Metric names must use base units"
    }

    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
        match metric_unit(&metric.name) {
            Some((unit, base)) if unit != base => vec![Problem::new(
                metric,
                format!("use base unit \"{base}\" instead of \"{unit}\""),
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promlinter_core::MetricKind;

    fn check(name: &str) -> Vec<Problem> {
        MetricUnits::new().check(&MetricDescriptor::new(MetricKind::Histogram, name, "h"))
    }

    #[test]
    fn test_detects_prefixed_unit() {
        let problems = check("request_duration_milliseconds");
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].text,
            "use base unit \"seconds\" instead of \"milliseconds\""
        );
    }

    #[test]
    fn test_detects_non_base_unit() {
        let problems = check("uptime_hours");
        assert_eq!(
            problems[0].text,
            "use base unit \"seconds\" instead of \"hours\""
        );
    }

    #[test]
    fn test_accepts_base_units() {
        assert!(check("request_duration_seconds").is_empty());
        assert!(check("response_size_bytes").is_empty());
        assert!(check("queue_length").is_empty());
    }

    #[test]
    fn test_first_unit_segment_wins() {
        // "seconds" is seen before "hours", so nothing is reported.
        assert!(check("seconds_since_hours").is_empty());
    }
}

//! The set of built-in checks.

use crate::{
    CamelCase, CounterSuffix, HistogramSummaryReserved, MetricTypeInName, MetricUnits,
    RequireHelp, ReservedChars, UnitAbbreviations,
};
use promlinter_core::CheckBox;

/// Returns every built-in check, in the order they run.
#[must_use]
pub fn all_checks() -> Vec<CheckBox> {
    vec![
        Box::new(RequireHelp::new()),
        Box::new(MetricUnits::new()),
        Box::new(CounterSuffix::new()),
        Box::new(HistogramSummaryReserved::new()),
        Box::new(MetricTypeInName::new()),
        Box::new(ReservedChars::new()),
        Box::new(CamelCase::new()),
        Box::new(UnitAbbreviations::new()),
    ]
}

/// Returns true if `key` is the name or code of a built-in check.
#[must_use]
pub fn is_known_check(key: &str) -> bool {
    all_checks()
        .iter()
        .any(|c| c.name() == key || c.code() == key)
}

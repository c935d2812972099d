//! # promlinter-rules
//!
//! Built-in metric checks for promlinter.
//!
//! The checks follow the Prometheus naming conventions enforced by
//! `promlint`. [`PromLint`] bundles them into a
//! [`MetricValidator`](promlinter_core::MetricValidator).
//!
//! ## Available Checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | PL001 | `help` | Metrics must have help text |
//! | PL002 | `metric-units` | Metric names must use base units |
//! | PL003 | `counter` | Only counters end in `_total` |
//! | PL004 | `histogram-summary-reserved` | `_bucket`, `_count`, `_sum` are reserved |
//! | PL005 | `metric-type-in-name` | Metric names must not include their type |
//! | PL006 | `reserved-chars` | Metric names must not contain `:` |
//! | PL007 | `camel-case` | Metric names must be snake_case |
//! | PL008 | `unit-abbreviations` | Metric names must spell out units |
//!
//! ## Usage
//!
//! ```ignore
//! use promlinter_rules::PromLint;
//!
//! let validator = PromLint::new().disable(["unit-abbreviations"]);
//! let issues = promlinter_core::lint_occurrences(&occurrences, vec![], &validator)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod camel_case;
mod catalog;
mod counter;
mod help;
mod histogram_summary_reserved;
mod metric_type_in_name;
mod metric_units;
mod promlint;
mod reserved_chars;
mod unit_abbreviations;

pub use camel_case::CamelCase;
pub use catalog::{all_checks, is_known_check};
pub use counter::CounterSuffix;
pub use help::RequireHelp;
pub use histogram_summary_reserved::HistogramSummaryReserved;
pub use metric_type_in_name::MetricTypeInName;
pub use metric_units::MetricUnits;
pub use promlint::PromLint;
pub use reserved_chars::ReservedChars;
pub use unit_abbreviations::UnitAbbreviations;

/// Re-export core types for convenience.
pub use promlinter_core::{MetricCheck, MetricDescriptor, MetricKind, Problem};

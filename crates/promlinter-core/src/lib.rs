//! # promlinter-core
//!
//! Core framework for linting Prometheus metric declarations.
//!
//! This crate provides the language-independent pieces of the linter:
//!
//! - [`MetricDescriptor`] and the [`Occurrences`] arena recording where each
//!   descriptor was declared
//! - [`MetricValidator`] and [`MetricCheck`] traits for judging descriptors
//! - [`lint_occurrences`] for turning occurrences into ordered [`Issue`]s
//! - [`Config`] for TOML based configuration
//!
//! ## Example
//!
//! ```ignore
//! use promlinter_core::{lint_occurrences, Occurrences};
//!
//! let issues = lint_occurrences(&occurrences, structural, &validator)?;
//! for issue in &issues {
//!     println!("{issue}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod metric;
mod orchestrator;
mod types;
mod validator;

pub use config::{AnalyzerConfig, CheckConfig, Config, ConfigError};
pub use error::LintError;
pub use metric::{
    build_fq_name, MetricDescriptor, MetricKind, MetricOccurrence, OccurrenceId, Occurrences,
};
pub use orchestrator::lint_occurrences;
pub use types::{sort_issues, Issue, IssueDiagnostic, LintResult, SourcePosition};
pub use validator::{CheckBox, MetricCheck, MetricValidator, Problem, ValidationError};

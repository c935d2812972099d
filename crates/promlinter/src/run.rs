//! Entry points over already parsed files.

use promlinter_core::{lint_occurrences, Issue, LintError, MetricOccurrence, MetricValidator};
use promlinter_go::{collect_all, GoFile};
use promlinter_rules::PromLint;

/// Options for [`run_lint`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setting {
    /// Report malformed call sites as issues.
    pub strict: bool,
    /// Names or codes of checks to skip.
    pub disabled_checks: Vec<String>,
}

/// Lists every metric declared in `files`, ordered by position.
///
/// No check is run; structural issues found in strict mode are dropped.
///
/// # Errors
///
/// Returns [`LintError::MalformedLiteral`] for an undecodable string
/// literal.
pub fn run_list(files: &[GoFile], strict: bool) -> Result<Vec<MetricOccurrence>, LintError> {
    let collection = collect_all(files, strict)?;
    Ok(collection.occurrences.into_sorted())
}

/// Lints every metric declared in `files` with the built-in checks.
///
/// # Errors
///
/// See [`run_with`].
pub fn run_lint(files: &[GoFile], setting: &Setting) -> Result<Vec<Issue>, LintError> {
    let validator = PromLint::new().disable(&setting.disabled_checks);
    run_with(files, setting.strict, &validator)
}

/// Lints every metric declared in `files` with a caller-supplied validator.
///
/// # Errors
///
/// Returns [`LintError::MalformedLiteral`] for an undecodable string
/// literal and [`LintError::Validator`] if `validator` rejects a metric.
pub fn run_with(
    files: &[GoFile],
    strict: bool,
    validator: &dyn MetricValidator,
) -> Result<Vec<Issue>, LintError> {
    let collection = collect_all(files, strict)?;
    lint_occurrences(&collection.occurrences, collection.issues, validator)
}

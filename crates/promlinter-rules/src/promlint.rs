//! The built-in metric validator.

use crate::all_checks;
use promlinter_core::{CheckBox, MetricDescriptor, MetricValidator, Problem, ValidationError};
use tracing::debug;

/// Runs the built-in checks against each metric descriptor.
///
/// # Example
///
/// ```ignore
/// use promlinter_rules::PromLint;
///
/// let lint = PromLint::new().disable(["unit-abbreviations", "PL001"]);
/// let problems = lint.validate(&descriptor)?;
/// ```
pub struct PromLint {
    checks: Vec<CheckBox>,
}

impl PromLint {
    /// Creates a validator running every built-in check.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: all_checks(),
        }
    }

    /// Creates a validator from an explicit list of checks.
    #[must_use]
    pub fn with_checks(checks: Vec<CheckBox>) -> Self {
        Self { checks }
    }

    /// Removes checks whose name or code is listed in `keys`.
    #[must_use]
    pub fn disable<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<S> = keys.into_iter().collect();
        self.checks.retain(|check| {
            let disabled = keys
                .iter()
                .any(|k| k.as_ref() == check.name() || k.as_ref() == check.code());
            if disabled {
                debug!("Check {} ({}) disabled", check.code(), check.name());
            }
            !disabled
        });
        self
    }

    /// Returns the active checks.
    #[must_use]
    pub fn checks(&self) -> &[CheckBox] {
        &self.checks
    }
}

impl Default for PromLint {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PromLint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromLint")
            .field(
                "checks",
                &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl MetricValidator for PromLint {
    fn validate(&self, descriptor: &MetricDescriptor) -> Result<Vec<Problem>, ValidationError> {
        let mut problems: Vec<Problem> = self
            .checks
            .iter()
            .flat_map(|check| check.check(descriptor))
            .collect();
        problems.sort_by(|a, b| (&a.metric, &a.text).cmp(&(&b.metric, &b.text)));
        Ok(problems)
    }
}

//! Validator traits for judging finished metric descriptors.

use crate::metric::MetricDescriptor;

/// A naming or documentation problem with a single metric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Problem {
    /// Name of the affected metric.
    pub metric: String,
    /// Human-readable description of the problem.
    pub text: String,
}

impl Problem {
    /// Creates a problem for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &MetricDescriptor, text: impl Into<String>) -> Self {
        Self {
            metric: descriptor.name.clone(),
            text: text.into(),
        }
    }
}

/// A descriptor the validator refused to judge at all.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// What made the descriptor unacceptable.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Judges one finished metric descriptor.
///
/// Implementations return every problem they find. Returning an error means
/// the descriptor itself is malformed; the orchestrator treats that as fatal.
pub trait MetricValidator: Send + Sync {
    /// Validates a single descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the descriptor cannot be validated.
    fn validate(&self, descriptor: &MetricDescriptor) -> Result<Vec<Problem>, ValidationError>;
}

/// A single named check run against a metric descriptor.
///
/// # Example
///
/// ```ignore
/// use promlinter_core::{MetricCheck, MetricDescriptor, Problem};
///
/// pub struct NoColons;
///
/// impl MetricCheck for NoColons {
///     fn name(&self) -> &'static str { "reserved-chars" }
///     fn code(&self) -> &'static str { "PL006" }
///
///     fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
///         if metric.name.contains(':') {
///             vec![Problem::new(metric, "metric names should not contain ':'")]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait MetricCheck: Send + Sync {
    /// Returns the kebab-case name of this check (e.g., "camel-case").
    fn name(&self) -> &'static str;

    /// Returns the check code (e.g., "PL007").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this check looks for.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks one descriptor and returns the problems found.
    fn check(&self, metric: &MetricDescriptor) -> Vec<Problem>;
}

/// Type alias for boxed `MetricCheck` trait objects.
pub type CheckBox = Box<dyn MetricCheck>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricKind;

    struct EmptyName;

    impl MetricCheck for EmptyName {
        fn name(&self) -> &'static str {
            "empty-name"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test check"
        }

        fn check(&self, metric: &MetricDescriptor) -> Vec<Problem> {
            if metric.name.is_empty() {
                vec![Problem::new(metric, "empty name")]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn check_trait_reports_problem() {
        let check = EmptyName;
        let metric = MetricDescriptor::new(MetricKind::Gauge, "", "help");
        let problems = check.check(&metric);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].metric, "");
        assert_eq!(check.code(), "TEST001");
    }
}

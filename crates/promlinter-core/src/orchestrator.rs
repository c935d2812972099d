//! Turns recorded metric occurrences into the final, ordered issue list.

use crate::error::LintError;
use crate::metric::Occurrences;
use crate::types::{sort_issues, Issue};
use crate::validator::MetricValidator;

use tracing::{debug, info};

/// Validates every occurrence and merges the problems with earlier
/// structural issues.
///
/// Each descriptor is submitted to `validator` on its own; every problem
/// becomes an [`Issue`] at the occurrence's position. The combined list is
/// sorted by position text before it is returned.
///
/// # Errors
///
/// Returns [`LintError::Validator`] as soon as the validator rejects a
/// descriptor. No partial result is returned in that case.
pub fn lint_occurrences(
    occurrences: &Occurrences,
    structural: Vec<Issue>,
    validator: &dyn MetricValidator,
) -> Result<Vec<Issue>, LintError> {
    let mut issues = structural;

    for (id, occurrence) in occurrences.iter() {
        let problems = validator
            .validate(&occurrence.descriptor)
            .map_err(|e| LintError::Validator {
                position: occurrence.position.clone(),
                metric: occurrence.descriptor.name.clone(),
                message: e.message,
            })?;

        debug!(
            "Metric #{} {:?} at {}: {} problem(s)",
            id.index(),
            occurrence.descriptor.name,
            occurrence.position,
            problems.len()
        );

        issues.extend(problems.into_iter().map(|p| {
            Issue::for_metric(occurrence.position.clone(), p.metric, p.text)
        }));
    }

    sort_issues(&mut issues);

    info!(
        "Linted {} metric(s): {} issue(s)",
        occurrences.len(),
        issues.len()
    );

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{MetricDescriptor, MetricKind};
    use crate::types::SourcePosition;
    use crate::validator::{Problem, ValidationError};

    struct NeedsHelp;

    impl MetricValidator for NeedsHelp {
        fn validate(&self, d: &MetricDescriptor) -> Result<Vec<Problem>, ValidationError> {
            if d.help.is_empty() {
                Ok(vec![Problem::new(d, "no help text")])
            } else {
                Ok(vec![])
            }
        }
    }

    struct RejectsUntyped;

    impl MetricValidator for RejectsUntyped {
        fn validate(&self, d: &MetricDescriptor) -> Result<Vec<Problem>, ValidationError> {
            if d.kind == MetricKind::Untyped {
                Err(ValidationError::new("untyped metric"))
            } else {
                Ok(vec![])
            }
        }
    }

    fn occurrences(entries: &[(&str, usize, &str)]) -> Occurrences {
        let mut arena = Occurrences::new();
        for (name, line, help) in entries {
            arena.record(
                MetricDescriptor::new(MetricKind::Counter, *name, *help),
                SourcePosition::new("m.go", *line, 3),
            );
        }
        arena
    }

    #[test]
    fn duplicates_report_at_each_position() {
        let arena = occurrences(&[("a_total", 20, ""), ("a_total", 5, "")]);
        let issues = lint_occurrences(&arena, vec![], &NeedsHelp).expect("lint");

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].position.line, 20); // "m.go:20:3" < "m.go:5:3"
        assert_eq!(issues[1].position.line, 5);
        assert!(issues.iter().all(|i| i.metric.as_deref() == Some("a_total")));
    }

    #[test]
    fn structural_issues_are_merged_and_sorted() {
        let arena = occurrences(&[("b_total", 2, "")]);
        let structural = vec![Issue::structural(
            SourcePosition::new("m.go", 1, 1),
            "NewDesc should have 4 args",
        )];
        let issues = lint_occurrences(&arena, structural, &NeedsHelp).expect("lint");

        assert_eq!(issues.len(), 2);
        assert!(issues[0].metric.is_none());
        assert_eq!(issues[1].text, "no help text");
    }

    #[test]
    fn validator_rejection_is_fatal() {
        let mut arena = Occurrences::new();
        arena.record(
            MetricDescriptor::new(MetricKind::Untyped, "x", "h"),
            SourcePosition::new("m.go", 7, 2),
        );
        let err = lint_occurrences(&arena, vec![], &RejectsUntyped).unwrap_err();
        assert!(matches!(err, LintError::Validator { .. }));
        assert!(err.to_string().starts_with("m.go:7:2"));
    }
}

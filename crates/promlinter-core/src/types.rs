//! Core types for lint issues and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::metric::MetricOccurrence;

/// Source code position.
///
/// Positions are ordered by their [`Display`](std::fmt::Display) text, the
/// same `file:line:column` string users see in reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// File path as given to the analyzer.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 means invalid).
    pub line: usize,
    /// Column number (1-indexed, counted in bytes).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    #[serde(default)]
    pub offset: usize,
}

impl SourcePosition {
    /// Creates a new position with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset: 0,
        }
    }

    /// Sets the byte offset for this position.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns true if the position refers to an actual line.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = self.file.display().to_string();
        if self.is_valid() {
            if !s.is_empty() {
                s.push(':');
            }
            s.push_str(&self.line.to_string());
            if self.column != 0 {
                s.push(':');
                s.push_str(&self.column.to_string());
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        f.write_str(&s)
    }
}

/// A problem found at a metric declaration site.
///
/// Structural issues (malformed call sites, unsupported literals) carry no
/// metric name; issues reported by the metric validator do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Where the problem was found.
    pub position: SourcePosition,
    /// Name of the affected metric, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// Human-readable message.
    pub text: String,
}

impl Issue {
    /// Creates a structural issue with no associated metric.
    #[must_use]
    pub fn structural(position: SourcePosition, text: impl Into<String>) -> Self {
        Self {
            position,
            metric: None,
            text: text.into(),
        }
    }

    /// Creates an issue attributed to a metric.
    #[must_use]
    pub fn for_metric(
        position: SourcePosition,
        metric: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            position,
            metric: Some(metric.into()),
            text: text.into(),
        }
    }

    /// Formats the issue for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        match &self.metric {
            Some(metric) if !metric.is_empty() => {
                format!("{}: {}: {}", self.position, metric, self.text)
            }
            _ => format!("{}: {}", self.position, self.text),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

/// Sorts issues by the text of their position.
///
/// The sort is stable, so issues at the same position keep the order in
/// which they were reported. Sorting an already sorted slice is a no-op.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by_cached_key(|issue| issue.position.to_string());
}

/// Converts an [`Issue`] to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct IssueDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Issue> for IssueDiagnostic {
    fn from(issue: &Issue) -> Self {
        let label_message = match &issue.metric {
            Some(metric) if !metric.is_empty() => format!("metric `{metric}`"),
            _ => "declared here".to_string(),
        };
        Self {
            message: issue.text.clone(),
            help: Some(format!("at {}", issue.position)),
            span: SourceSpan::from((issue.position.offset, 0)),
            label_message,
        }
    }
}

/// Result of running a lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All issues found, sorted by position.
    pub issues: Vec<Issue>,
    /// All metric declarations found, sorted by position.
    pub metrics: Vec<MetricOccurrence>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any issues.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Returns the issues attributed to the given metric.
    #[must_use]
    pub fn issues_for(&self, metric: &str) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.metric.as_deref() == Some(metric))
            .collect()
    }

    /// Counts structural and metric issues.
    #[must_use]
    pub fn count_by_origin(&self) -> (usize, usize) {
        let structural = self.issues.iter().filter(|i| i.metric.is_none()).count();
        (structural, self.issues.len() - structural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_at(file: &str, line: usize, column: usize, text: &str) -> Issue {
        Issue::structural(SourcePosition::new(file, line, column), text)
    }

    #[test]
    fn position_display_matches_go_format() {
        assert_eq!(
            SourcePosition::new("main.go", 12, 5).to_string(),
            "main.go:12:5"
        );
        assert_eq!(SourcePosition::new("", 3, 1).to_string(), "3:1");
        assert_eq!(SourcePosition::default().to_string(), "-");
        assert_eq!(SourcePosition::new("main.go", 0, 0).to_string(), "main.go");
        assert_eq!(SourcePosition::new("main.go", 7, 0).to_string(), "main.go:7");
    }

    #[test]
    fn issue_format_includes_metric() {
        let issue = Issue::for_metric(
            SourcePosition::new("a.go", 1, 2),
            "http_requests",
            "counter metrics should have \"_total\" suffix",
        );
        assert_eq!(
            issue.format(),
            "a.go:1:2: http_requests: counter metrics should have \"_total\" suffix"
        );
    }

    #[test]
    fn issue_format_omits_missing_metric() {
        let issue = issue_at("a.go", 4, 9, "NewDesc should have 4 args");
        assert_eq!(issue.format(), "a.go:4:9: NewDesc should have 4 args");
    }

    #[test]
    fn sort_uses_position_text() {
        let mut issues = vec![
            issue_at("b.go", 1, 1, "b"),
            issue_at("a.go", 9, 1, "a9"),
            issue_at("a.go", 10, 1, "a10"),
        ];
        sort_issues(&mut issues);
        let texts: Vec<&str> = issues.iter().map(|i| i.text.as_str()).collect();
        // "a.go:10:1" sorts before "a.go:9:1" as text
        assert_eq!(texts, vec!["a10", "a9", "b"]);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let mut issues = vec![
            issue_at("a.go", 2, 1, "first"),
            issue_at("a.go", 1, 1, "other"),
            issue_at("a.go", 2, 1, "second"),
        ];
        sort_issues(&mut issues);
        let once = issues.clone();
        sort_issues(&mut issues);
        assert_eq!(once, issues);
        assert_eq!(issues[1].text, "first");
        assert_eq!(issues[2].text, "second");
    }

    #[test]
    fn count_by_origin_splits_structural() {
        let mut result = LintResult::new();
        result.issues.push(issue_at("a.go", 1, 1, "structural"));
        result.issues.push(Issue::for_metric(
            SourcePosition::new("a.go", 2, 1),
            "m",
            "no help text",
        ));
        assert_eq!(result.count_by_origin(), (1, 1));
        assert_eq!(result.issues_for("m").len(), 1);
    }
}

//! Fatal errors that abort a lint run.

use crate::types::SourcePosition;

/// Conditions that stop a run instead of being reported as issues.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The metric validator rejected a descriptor outright.
    #[error("{position}: validator rejected metric {metric:?}: {message}")]
    Validator {
        /// Where the descriptor was declared.
        position: SourcePosition,
        /// Qualified name of the rejected metric.
        metric: String,
        /// Validator message.
        message: String,
    },

    /// A string literal in the syntax tree could not be unescaped.
    #[error("{position}: malformed string literal {literal}: {message}")]
    MalformedLiteral {
        /// Position of the literal.
        position: SourcePosition,
        /// Raw literal text as it appears in source.
        literal: String,
        /// What was wrong with it.
        message: String,
    },
}

//! Errors raised while reading Go source.

use std::path::PathBuf;

/// Failure to turn Go source into a [`GoFile`](crate::GoFile).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The Go grammar could not be loaded into the parser.
    #[error("Failed to load Go grammar: {0}")]
    Language(String),

    /// The parser returned no tree.
    #[error("{}: parser produced no syntax tree", path.display())]
    NoTree {
        /// File being parsed.
        path: PathBuf,
    },

    /// The source contains a syntax error.
    #[error("{}:{line}:{column}: syntax error", path.display())]
    Syntax {
        /// File being parsed.
        path: PathBuf,
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error (1-indexed).
        column: usize,
    },
}

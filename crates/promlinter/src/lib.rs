//! # promlinter
//!
//! Static linter for Prometheus metric declarations in Go source code.
//!
//! This is the main facade crate that re-exports core functionality, the
//! built-in checks and the Go front-end.
//!
//! ## Directory Analysis
//!
//! ```rust,ignore
//! use promlinter::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./pkg")
//!     .strict(true)
//!     .disable("unit-abbreviations")
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! for issue in &result.issues {
//!     println!("{issue}");
//! }
//! ```
//!
//! ## Parsed Files
//!
//! ```rust,ignore
//! use promlinter::{go::GoParser, run_lint, Setting};
//!
//! let file = GoParser::new().parse("metrics.go", &source)?;
//! let issues = run_lint(&[file], &Setting::default())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core types and traits
pub use promlinter_core::*;

/// Built-in checks and the default validator.
pub mod rules {
    pub use promlinter_rules::*;
}

/// Go parsing and metric discovery.
pub mod go {
    pub use promlinter_go::*;
}

mod analyzer;
mod run;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use run::{run_lint, run_list, run_with, Setting};

//! # promlinter-go
//!
//! Tree-sitter based Go front-end for promlinter.
//!
//! Go source is parsed with `tree-sitter-go` and lowered into a small
//! syntax model ([`GoFile`]) whose identifiers are linked to their
//! declarations. On top of that model:
//!
//! - [`Resolver`] turns literals, identifiers and `+` concatenations into
//!   string values
//! - [`extract_options`] reads `Namespace`, `Subsystem`, `Name` and `Help`
//!   from `prometheus.*Opts` literals
//! - [`collect`] walks a file and records every metric declaration it
//!   recognizes, see [`registry`] for the constructor tables
//!
//! ## Example
//!
//! ```ignore
//! use promlinter_go::{collect, GoParser};
//!
//! let file = GoParser::new().parse("metrics.go", &source)?;
//! let found = collect(&file, true)?;
//! for (_, occurrence) in found.occurrences.iter() {
//!     println!("{} {}", occurrence.position, occurrence.descriptor.name);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod error;
mod literal;
mod options;
mod parser;
pub mod registry;
mod resolver;
mod visit;
mod walker;

pub use ast::GoFile;
pub use error::ParseError;
pub use literal::{unquote, UnquoteError};
pub use options::{extract_options, ExtractedOptions, OptionRecord};
pub use parser::GoParser;
pub use resolver::{Resolver, MAX_INDIRECTION, MAX_VALUE_LEN};
pub use visit::{walk_expr, walk_file, walk_stmt, Visitor};
pub use walker::{collect, collect_all, Collection};

//! Resolution of expressions to string values.
//!
//! Supported shapes are string literals, identifiers bound to a value, and
//! `+` concatenation of supported shapes. Anything else is a resolution
//! failure (`Ok(None)`); in strict mode the failure is also reported as an
//! [`Issue`].

use std::collections::HashMap;

use promlinter_core::{Issue, LintError};
use tracing::debug;

use crate::ast::{DeclId, Expr, GoFile, Ident, LitKind};
use crate::literal::unquote;

/// Longest identifier chain followed before giving up.
pub const MAX_INDIRECTION: usize = 64;

/// Longest resolved value, in bytes.
pub const MAX_VALUE_LEN: usize = 4096;

/// State of one [`Resolver::resolve`] call.
#[derive(Default)]
struct Trail {
    /// Declarations currently being followed.
    chain: Vec<DeclId>,
    /// Values of declarations already resolved.
    resolved: HashMap<DeclId, String>,
}

/// Resolves expressions of one file to strings.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'f> {
    file: &'f GoFile,
    strict: bool,
}

impl<'f> Resolver<'f> {
    /// Creates a resolver over `file`.
    #[must_use]
    pub fn new(file: &'f GoFile, strict: bool) -> Self {
        Self { file, strict }
    }

    /// The file expressions belong to.
    #[must_use]
    pub fn file(&self) -> &'f GoFile {
        self.file
    }

    /// Whether unsupported shapes are reported.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Resolves `expr`, the value of the option called `field`.
    ///
    /// Returns `Ok(None)` when the value cannot be determined statically.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::MalformedLiteral`] for a string literal that
    /// cannot be unquoted.
    pub fn resolve(
        &self,
        field: &str,
        expr: &Expr,
        issues: &mut Vec<Issue>,
    ) -> Result<Option<String>, LintError> {
        self.resolve_in(field, expr, &mut Trail::default(), issues)
    }

    fn resolve_in(
        &self,
        field: &str,
        expr: &Expr,
        trail: &mut Trail,
        issues: &mut Vec<Issue>,
    ) -> Result<Option<String>, LintError> {
        match expr {
            Expr::BasicLit {
                pos,
                kind: LitKind::String,
                value,
            } => unquote(value)
                .map(Some)
                .map_err(|e| LintError::MalformedLiteral {
                    position: self.file.position(*pos),
                    literal: value.clone(),
                    message: e.to_string(),
                }),
            Expr::BasicLit { .. } => Ok(None),
            Expr::Ident(ident) => self.resolve_ident(field, ident, trail, issues),
            Expr::Binary {
                op, left, right, ..
            } => {
                if op != "+" {
                    return Ok(None);
                }
                let Some(left) = self.resolve_in(field, left, trail, issues)? else {
                    return Ok(None);
                };
                let Some(right) = self.resolve_in(field, right, trail, issues)? else {
                    return Ok(None);
                };
                if left.len() + right.len() > MAX_VALUE_LEN {
                    self.report(
                        issues,
                        expr,
                        format!("parsing field {field} exceeds {MAX_VALUE_LEN} bytes"),
                    );
                    return Ok(None);
                }
                Ok(Some(left + &right))
            }
            other => {
                self.report(
                    issues,
                    other,
                    format!(
                        "parsing field {field} with type {} is not supported",
                        other.describe()
                    ),
                );
                Ok(None)
            }
        }
    }

    fn resolve_ident(
        &self,
        field: &str,
        ident: &Ident,
        trail: &mut Trail,
        issues: &mut Vec<Issue>,
    ) -> Result<Option<String>, LintError> {
        let Some(id) = ident.decl else {
            debug!("{} is not declared in {}", ident.name, self.file.path.display());
            return Ok(None);
        };
        let Some(value) = self.file.decl(id).and_then(|d| d.value()) else {
            return Ok(None);
        };

        if let Some(value) = trail.resolved.get(&id) {
            return Ok(Some(value.clone()));
        }
        if trail.chain.contains(&id) {
            let text = format!(
                "parsing field {field} with cyclic reference to {} is not supported",
                ident.name
            );
            self.report_ident(issues, ident, text);
            return Ok(None);
        }
        if trail.chain.len() >= MAX_INDIRECTION {
            let text = format!(
                "parsing field {field} exceeds {MAX_INDIRECTION} levels of indirection"
            );
            self.report_ident(issues, ident, text);
            return Ok(None);
        }

        trail.chain.push(id);
        let resolved = self.resolve_in(field, value, trail, issues);
        trail.chain.pop();
        if let Ok(Some(value)) = &resolved {
            trail.resolved.insert(id, value.clone());
        }
        resolved
    }

    fn report(&self, issues: &mut Vec<Issue>, expr: &Expr, text: String) {
        if self.strict {
            issues.push(Issue::structural(self.file.position(expr.pos()), text));
        } else {
            debug!("{}: {}", self.file.position(expr.pos()), text);
        }
    }

    fn report_ident(&self, issues: &mut Vec<Issue>, ident: &Ident, text: String) {
        if self.strict {
            issues.push(Issue::structural(self.file.position(ident.pos), text));
        } else {
            debug!("{}: {}", self.file.position(ident.pos), text);
        }
    }
}

//! Pre-order traversal over the lowered syntax model.

use crate::ast::{Element, Expr, GoFile, Stmt};

/// Callbacks invoked for every node, parents before children.
pub trait Visitor {
    /// Error that stops the traversal.
    type Error;

    /// Called for every statement.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal and is returned to the caller.
    fn visit_stmt(&mut self, _stmt: &Stmt) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every expression.
    ///
    /// # Errors
    ///
    /// An error aborts the traversal and is returned to the caller.
    fn visit_expr(&mut self, _expr: &Expr) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Visits every statement of `file` in source order.
///
/// # Errors
///
/// Returns the first error raised by the visitor.
pub fn walk_file<V: Visitor>(visitor: &mut V, file: &GoFile) -> Result<(), V::Error> {
    file.stmts.iter().try_for_each(|stmt| walk_stmt(visitor, stmt))
}

/// Visits `stmt` and everything below it.
///
/// # Errors
///
/// Returns the first error raised by the visitor.
pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) -> Result<(), V::Error> {
    visitor.visit_stmt(stmt)?;

    match stmt {
        Stmt::Expr(expr) => walk_expr(visitor, expr),
        Stmt::Send { channel, value, .. } => {
            walk_expr(visitor, channel)?;
            walk_expr(visitor, value)
        }
        Stmt::Assign { lhs, rhs, .. } => {
            lhs.iter().try_for_each(|e| walk_expr(visitor, e))?;
            rhs.iter().try_for_each(|e| walk_expr(visitor, e))
        }
        Stmt::ValueDecl { specs, .. } => specs
            .iter()
            .flat_map(|spec| spec.values.iter())
            .try_for_each(|e| walk_expr(visitor, e)),
        Stmt::Block { stmts, .. } | Stmt::Func { body: stmts, .. } => {
            stmts.iter().try_for_each(|s| walk_stmt(visitor, s))
        }
    }
}

/// Visits `expr` and everything below it.
///
/// # Errors
///
/// Returns the first error raised by the visitor.
pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) -> Result<(), V::Error> {
    visitor.visit_expr(expr)?;

    match expr {
        Expr::BasicLit { .. } | Expr::Ident(_) => Ok(()),
        Expr::Selector { operand, .. } => walk_expr(visitor, operand),
        Expr::Call { func, args, .. } => {
            walk_expr(visitor, func)?;
            args.iter().try_for_each(|a| walk_expr(visitor, a))
        }
        Expr::Binary { left, right, .. } => {
            walk_expr(visitor, left)?;
            walk_expr(visitor, right)
        }
        Expr::Unary { operand, .. } => walk_expr(visitor, operand),
        Expr::Paren { inner, .. } => walk_expr(visitor, inner),
        Expr::Composite { elements, .. } => elements.iter().try_for_each(|el| match el {
            Element::Keyed { key, value } => {
                walk_expr(visitor, key)?;
                walk_expr(visitor, value)
            }
            Element::Value(value) => walk_expr(visitor, value),
        }),
        Expr::FuncLit { body, .. } => body.iter().try_for_each(|s| walk_stmt(visitor, s)),
        Expr::Other { children, .. } => children.iter().try_for_each(|c| walk_expr(visitor, c)),
    }
}

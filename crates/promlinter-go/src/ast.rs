//! Lowered Go syntax model.
//!
//! Only the shapes the metric matcher cares about get their own variant;
//! everything else is kept as [`Expr::Other`] with its sub-expressions so
//! traversal still reaches nested calls.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use promlinter_core::SourcePosition;

/// Start of a node in its file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, counted in bytes).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
}

/// Handle to a [`Declaration`] in a [`GoFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub(crate) usize);

impl DeclId {
    /// Index into the file's declaration table.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Token kind of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    /// Interpreted or raw string.
    String,
    /// Integer.
    Int,
    /// Floating point.
    Float,
    /// Imaginary.
    Imag,
    /// Rune.
    Char,
}

/// An identifier and the declaration it refers to, if it was resolved
/// within the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    /// Position of the identifier.
    pub pos: Pos,
    /// Identifier text.
    pub name: String,
    /// Declaration the identifier refers to.
    pub decl: Option<DeclId>,
}

/// Element of a composite literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// `key: value`
    Keyed {
        /// Key expression; struct field names are unresolved identifiers.
        key: Expr,
        /// Value expression.
        value: Expr,
    },
    /// Positional element.
    Value(Expr),
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal token, `value` is the raw source text including quotes.
    BasicLit {
        /// Literal start.
        pos: Pos,
        /// Token kind.
        kind: LitKind,
        /// Raw literal text.
        value: String,
    },
    /// Identifier reference.
    Ident(Ident),
    /// `operand.field`
    Selector {
        /// Start of the operand.
        pos: Pos,
        /// Left-hand side.
        operand: Box<Expr>,
        /// Selected name.
        field: Ident,
    },
    /// Function or method call.
    Call {
        /// Start of the callee.
        pos: Pos,
        /// Callee expression.
        func: Box<Expr>,
        /// Arguments in order.
        args: Vec<Expr>,
    },
    /// Binary operation.
    Binary {
        /// Start of the left operand.
        pos: Pos,
        /// Operator token, e.g. `+`.
        op: String,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// Unary operation such as `&x` or `-x`.
    Unary {
        /// Operator position.
        pos: Pos,
        /// Operator token.
        op: String,
        /// Operand.
        operand: Box<Expr>,
    },
    /// `(inner)`
    Paren {
        /// Opening parenthesis.
        pos: Pos,
        /// Wrapped expression.
        inner: Box<Expr>,
    },
    /// `Type{...}` or an elided-type `{...}` inside another literal.
    Composite {
        /// Start of the type, or of the brace when elided.
        pos: Pos,
        /// Source text of the literal type.
        type_name: Option<String>,
        /// Elements in order.
        elements: Vec<Element>,
    },
    /// `func(...) { ... }`
    FuncLit {
        /// Position of the `func` keyword.
        pos: Pos,
        /// Body statements.
        body: Vec<Stmt>,
    },
    /// Any other expression shape.
    Other {
        /// Start of the node.
        pos: Pos,
        /// Grammar node kind, e.g. `index_expression`.
        kind: String,
        /// Sub-expressions in source order.
        children: Vec<Expr>,
    },
}

impl Expr {
    /// Position of the first token of the expression.
    #[must_use]
    pub fn pos(&self) -> Pos {
        match self {
            Self::BasicLit { pos, .. }
            | Self::Selector { pos, .. }
            | Self::Call { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Paren { pos, .. }
            | Self::Composite { pos, .. }
            | Self::FuncLit { pos, .. }
            | Self::Other { pos, .. } => *pos,
            Self::Ident(ident) => ident.pos,
        }
    }

    /// Human-readable name of the expression shape.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::BasicLit { .. } => "basic literal".to_string(),
            Self::Ident(_) => "identifier".to_string(),
            Self::Selector { .. } => "selector expression".to_string(),
            Self::Call { .. } => "call expression".to_string(),
            Self::Binary { .. } => "binary expression".to_string(),
            Self::Unary { .. } => "unary expression".to_string(),
            Self::Paren { .. } => "parenthesized expression".to_string(),
            Self::Composite { .. } => "composite literal".to_string(),
            Self::FuncLit { .. } => "function literal".to_string(),
            Self::Other { kind, .. } => kind.replace('_', " "),
        }
    }

    /// Name of a called function: the identifier itself, or the selected
    /// name of a selector.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        match self {
            Self::Ident(ident) => Some(&ident.name),
            Self::Selector { field, .. } => Some(&field.name),
            _ => None,
        }
    }
}

/// One `names = values` group of a `var` or `const` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    /// Declared names.
    pub names: Vec<Ident>,
    /// Initializers, possibly empty.
    pub values: Vec<Arc<Expr>>,
}

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Expression evaluated for its effect, or any expression held by a
    /// statement that has no variant of its own.
    Expr(Expr),
    /// `channel <- value`
    Send {
        /// Start of the statement.
        pos: Pos,
        /// Channel expression.
        channel: Expr,
        /// Sent value.
        value: Expr,
    },
    /// `lhs := rhs`, `lhs = rhs`, and the range/receive forms.
    Assign {
        /// Start of the statement.
        pos: Pos,
        /// Assigned expressions.
        lhs: Vec<Expr>,
        /// Right-hand side.
        rhs: Vec<Arc<Expr>>,
        /// True for `:=`.
        define: bool,
    },
    /// `var` or `const` declaration.
    ValueDecl {
        /// Position of the keyword.
        pos: Pos,
        /// True for `const`.
        constant: bool,
        /// Specs in order.
        specs: Vec<ValueSpec>,
    },
    /// Any statement grouping other statements.
    Block {
        /// Start of the grouping node.
        pos: Pos,
        /// Nested statements.
        stmts: Vec<Stmt>,
    },
    /// Function or method declaration.
    Func {
        /// Position of the `func` keyword.
        pos: Pos,
        /// Function name.
        name: Option<Ident>,
        /// Body statements.
        body: Vec<Stmt>,
    },
}

/// What a declared name is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// Introduced by `:=`; `value` is the right-hand expression at the same
    /// index as the name, absent when the counts differ.
    Assign {
        /// Right-hand expression for this name.
        value: Option<Arc<Expr>>,
    },
    /// Introduced by a `var` or `const` spec.
    ValueSpec {
        /// Initializer for this name.
        value: Option<Arc<Expr>>,
        /// True for `const`.
        constant: bool,
    },
    /// Any other declaration: parameter, function, type, range variable.
    Other {
        /// Declaration kind, e.g. `parameter`.
        kind: &'static str,
    },
}

/// A name declared somewhere in a file.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Declared name.
    pub name: String,
    /// Position of the declaring identifier.
    pub pos: Pos,
    /// What the name is bound to.
    pub binding: Binding,
}

impl Declaration {
    /// Value bound by an assignment or a value spec.
    #[must_use]
    pub fn value(&self) -> Option<&Arc<Expr>> {
        match &self.binding {
            Binding::Assign { value } | Binding::ValueSpec { value, .. } => value.as_ref(),
            Binding::Other { .. } => None,
        }
    }

    /// Human-readable name of the declaration kind.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match &self.binding {
            Binding::Assign { .. } => "assignment",
            Binding::ValueSpec { constant: true, .. } => "constant declaration",
            Binding::ValueSpec { constant: false, .. } => "variable declaration",
            Binding::Other { kind } => kind,
        }
    }
}

/// A parsed Go source file.
#[derive(Debug, Clone)]
pub struct GoFile {
    /// Path as given to the parser.
    pub path: PathBuf,
    /// Package name from the package clause.
    pub package: Option<String>,
    /// Top-level statements and declarations in source order.
    pub stmts: Vec<Stmt>,
    pub(crate) decls: Vec<Declaration>,
}

impl GoFile {
    /// Path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a declaration.
    #[must_use]
    pub fn decl(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.0)
    }

    /// All declarations, indexed by [`DeclId::index`].
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    /// Converts a node position into a reportable source position.
    #[must_use]
    pub fn position(&self, pos: Pos) -> SourcePosition {
        SourcePosition::new(self.path.clone(), pos.line, pos.column).with_offset(pos.offset)
    }
}

//! Go source parsing using Tree-sitter.
//!
//! The concrete tree is lowered into [`GoFile`] in a single pass. Identifiers
//! are linked to their declarations while lowering: package-level names are
//! visible anywhere in the file, local names only after their declaring
//! statement.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::ast::{
    Binding, DeclId, Declaration, Element, Expr, GoFile, Ident, LitKind, Pos, Stmt, ValueSpec,
};
use crate::error::ParseError;

/// Parses Go source files.
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Parses `source` and lowers it into a [`GoFile`] labelled with `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] if the source does not parse cleanly.
    pub fn parse(&self, path: impl Into<PathBuf>, source: &str) -> Result<GoFile, ParseError> {
        let path = path.into();

        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree { path: path.clone() })?;
        let root = tree.root_node();

        if root.has_error() {
            let (line, column) = first_error(root).map_or((0, 0), |node| {
                let p = node.start_position();
                (p.row + 1, p.column + 1)
            });
            return Err(ParseError::Syntax { path, line, column });
        }

        let mut lowering = Lowering::new(source.as_bytes());
        let (package, stmts) = lowering.lower_file(root);

        debug!(
            "Parsed {}: {} top-level statement(s), {} declaration(s)",
            path.display(),
            stmts.len(),
            lowering.decls.len()
        );

        Ok(GoFile {
            path,
            package,
            stmts,
            decls: lowering.decls,
        })
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(Node::has_error)
        .find_map(first_error)
}

fn pos_of(node: Node<'_>) -> Pos {
    let p = node.start_position();
    Pos {
        line: p.row + 1,
        column: p.column + 1,
        offset: node.start_byte(),
    }
}

/// Named children without comments.
fn named(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| !n.is_extra())
        .collect()
}

fn field_nodes<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children_by_field_name(field, &mut cursor).collect()
}

fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == token);
    found
}

fn is_statement(kind: &str) -> bool {
    matches!(kind, "block" | "statement_list")
        || kind.ends_with("_statement")
        || kind.ends_with("_declaration")
        || kind.ends_with("_clause")
        || kind.ends_with("_case")
}

/// `var_spec` / `const_spec` nodes of a declaration, flattening grouped
/// `( ... )` forms.
fn value_specs(node: Node<'_>) -> Vec<Node<'_>> {
    let mut specs = Vec::new();
    for child in named(node) {
        match child.kind() {
            "var_spec" | "const_spec" => specs.push(child),
            "var_spec_list" => specs.extend(
                named(child)
                    .into_iter()
                    .filter(|n| n.kind() == "var_spec"),
            ),
            _ => {}
        }
    }
    specs
}

fn unwrap_literal_element(node: Node<'_>) -> Node<'_> {
    if node.kind() == "literal_element" {
        named(node).first().copied().unwrap_or(node)
    } else {
        node
    }
}

type Scope = HashMap<String, DeclId>;

struct Lowering<'s> {
    src: &'s [u8],
    decls: Vec<Declaration>,
    scopes: Vec<Scope>,
    /// Package-level name nodes declared before lowering, by node id.
    predeclared: HashMap<usize, DeclId>,
}

impl<'s> Lowering<'s> {
    fn new(src: &'s [u8]) -> Self {
        Self {
            src,
            decls: Vec::new(),
            scopes: Vec::new(),
            predeclared: HashMap::new(),
        }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.src).unwrap_or("")
    }

    fn lookup(&self, name: &str) -> Option<DeclId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    fn declare(&mut self, node: Node<'_>, binding: Binding) -> Ident {
        let name = self.text(node).to_string();
        let pos = pos_of(node);
        if name == "_" {
            return Ident {
                pos,
                name,
                decl: None,
            };
        }

        let id = DeclId(self.decls.len());
        self.decls.push(Declaration {
            name: name.clone(),
            pos,
            binding,
        });
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.clone(), id);
        }
        Ident {
            pos,
            name,
            decl: Some(id),
        }
    }

    fn unresolved(&self, node: Node<'_>) -> Ident {
        Ident {
            pos: pos_of(node),
            name: self.text(node).to_string(),
            decl: None,
        }
    }

    fn lower_file(&mut self, root: Node<'_>) -> (Option<String>, Vec<Stmt>) {
        self.scopes.push(Scope::new());

        let top = named(root);
        for node in &top {
            self.predeclare(*node);
        }

        let mut package = None;
        let mut stmts = Vec::new();
        for node in top {
            match node.kind() {
                "package_clause" => {
                    package = named(node).first().map(|n| self.text(*n).to_string());
                }
                "import_declaration" | "type_declaration" => {}
                _ => stmts.extend(self.lower_stmt(node)),
            }
        }

        (package, stmts)
    }

    fn predeclare(&mut self, node: Node<'_>) {
        match node.kind() {
            "var_declaration" | "const_declaration" => {
                let constant = node.kind() == "const_declaration";
                for spec in value_specs(node) {
                    for name in field_nodes(spec, "name") {
                        let ident = self.declare(
                            name,
                            Binding::ValueSpec {
                                value: None,
                                constant,
                            },
                        );
                        if let Some(id) = ident.decl {
                            self.predeclared.insert(name.id(), id);
                        }
                    }
                }
            }
            "function_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare(name, Binding::Other { kind: "function" });
                }
            }
            "type_declaration" => self.declare_types(node),
            _ => {}
        }
    }

    fn declare_types(&mut self, node: Node<'_>) {
        for spec in named(node) {
            if let Some(name) = spec.child_by_field_name("name") {
                self.declare(name, Binding::Other { kind: "type" });
            }
        }
    }

    fn declare_params(&mut self, list: Node<'_>, kind: &'static str) {
        for param in named(list) {
            for name in field_nodes(param, "name") {
                self.declare(name, Binding::Other { kind });
            }
        }
    }

    fn lower_list(&mut self, list: Option<Node<'_>>) -> Vec<Expr> {
        let Some(list) = list else {
            return Vec::new();
        };
        let mut exprs = Vec::new();
        for node in named(list) {
            exprs.push(self.lower_expr(node));
        }
        exprs
    }

    fn lower_children(&mut self, node: Node<'_>) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        for child in named(node) {
            if is_statement(child.kind()) {
                stmts.extend(self.lower_stmt(child));
            } else {
                stmts.push(Stmt::Expr(self.lower_expr(child)));
            }
        }
        stmts
    }

    fn scoped_children(&mut self, node: Node<'_>) -> Vec<Stmt> {
        self.scopes.push(Scope::new());
        let stmts = self.lower_children(node);
        self.scopes.pop();
        stmts
    }

    fn lower_stmt(&mut self, node: Node<'_>) -> Option<Stmt> {
        let pos = pos_of(node);
        let stmt = match node.kind() {
            "comment"
            | "empty_statement"
            | "break_statement"
            | "continue_statement"
            | "goto_statement"
            | "fallthrough_statement"
            | "import_declaration"
            | "package_clause" => return None,
            "expression_statement" => {
                let inner = named(node).into_iter().next()?;
                Stmt::Expr(self.lower_expr(inner))
            }
            "send_statement" => {
                let channel = node.child_by_field_name("channel")?;
                let value = node.child_by_field_name("value")?;
                Stmt::Send {
                    pos,
                    channel: self.lower_expr(channel),
                    value: self.lower_expr(value),
                }
            }
            "short_var_declaration" => self.lower_define(node),
            "assignment_statement" => {
                let rhs = self.lower_list(node.child_by_field_name("right"));
                let lhs = self.lower_list(node.child_by_field_name("left"));
                Stmt::Assign {
                    pos,
                    lhs,
                    rhs: rhs.into_iter().map(Arc::new).collect(),
                    define: false,
                }
            }
            "var_declaration" | "const_declaration" => self.lower_value_decl(node),
            "type_declaration" => {
                self.declare_types(node);
                return None;
            }
            "function_declaration" | "method_declaration" => self.lower_func(node),
            "range_clause" | "receive_statement" => self.lower_binding_clause(node),
            "type_switch_statement" => self.lower_type_switch(node),
            // These share the scope of their parent.
            "for_clause" | "labeled_statement" | "statement_list" => Stmt::Block {
                pos,
                stmts: self.lower_children(node),
            },
            _ => Stmt::Block {
                pos,
                stmts: self.scoped_children(node),
            },
        };
        Some(stmt)
    }

    fn lower_value_decl(&mut self, node: Node<'_>) -> Stmt {
        let constant = node.kind() == "const_declaration";
        let mut specs = Vec::new();

        for spec in value_specs(node) {
            let values: Vec<Arc<Expr>> = self
                .lower_list(spec.child_by_field_name("value"))
                .into_iter()
                .map(Arc::new)
                .collect();
            let names = field_nodes(spec, "name");

            let mut idents = Vec::with_capacity(names.len());
            for (i, name) in names.iter().enumerate() {
                let value = if values.len() == names.len() {
                    values.get(i).cloned()
                } else {
                    None
                };
                let binding = Binding::ValueSpec { value, constant };
                idents.push(self.bind_value(*name, binding));
            }

            specs.push(ValueSpec {
                names: idents,
                values,
            });
        }

        Stmt::ValueDecl {
            pos: pos_of(node),
            constant,
            specs,
        }
    }

    /// Binds a spec name, filling in a package-level declaration made
    /// before lowering or declaring a new local one.
    fn bind_value(&mut self, node: Node<'_>, binding: Binding) -> Ident {
        let Some(id) = self.predeclared.get(&node.id()).copied() else {
            return self.declare(node, binding);
        };
        if let Some(decl) = self.decls.get_mut(id.0) {
            decl.binding = binding;
        }
        Ident {
            pos: pos_of(node),
            name: self.text(node).to_string(),
            decl: Some(id),
        }
    }

    fn lower_define(&mut self, node: Node<'_>) -> Stmt {
        let rhs: Vec<Arc<Expr>> = self
            .lower_list(node.child_by_field_name("right"))
            .into_iter()
            .map(Arc::new)
            .collect();
        let targets = node.child_by_field_name("left").map(named).unwrap_or_default();

        let mut lhs = Vec::with_capacity(targets.len());
        for (i, target) in targets.iter().enumerate() {
            if target.kind() != "identifier" {
                lhs.push(self.lower_expr(*target));
                continue;
            }

            let name = self.text(*target);
            let existing = self.scopes.last().and_then(|s| s.get(name)).copied();
            if let Some(id) = existing {
                lhs.push(Expr::Ident(Ident {
                    pos: pos_of(*target),
                    name: name.to_string(),
                    decl: Some(id),
                }));
                continue;
            }

            let value = if rhs.len() == targets.len() {
                rhs.get(i).cloned()
            } else {
                None
            };
            lhs.push(Expr::Ident(self.declare(*target, Binding::Assign { value })));
        }

        Stmt::Assign {
            pos: pos_of(node),
            lhs,
            rhs,
            define: true,
        }
    }

    /// `range` clauses and `select` receive statements.
    fn lower_binding_clause(&mut self, node: Node<'_>) -> Stmt {
        let rhs: Vec<Arc<Expr>> = match node.child_by_field_name("right") {
            Some(right) => vec![Arc::new(self.lower_expr(right))],
            None => Vec::new(),
        };
        let define = has_token(node, ":=");
        let kind = if node.kind() == "range_clause" {
            "range variable"
        } else {
            "receive variable"
        };

        let targets = node.child_by_field_name("left").map(named).unwrap_or_default();
        let mut lhs = Vec::with_capacity(targets.len());
        for target in targets {
            if define && target.kind() == "identifier" {
                lhs.push(Expr::Ident(self.declare(target, Binding::Other { kind })));
            } else {
                lhs.push(self.lower_expr(target));
            }
        }

        Stmt::Assign {
            pos: pos_of(node),
            lhs,
            rhs,
            define,
        }
    }

    fn lower_type_switch(&mut self, node: Node<'_>) -> Stmt {
        let pos = pos_of(node);
        self.scopes.push(Scope::new());

        let mut stmts = Vec::new();
        if let Some(init) = node.child_by_field_name("initializer") {
            stmts.extend(self.lower_stmt(init));
        }

        let rhs: Vec<Arc<Expr>> = match node.child_by_field_name("value") {
            Some(value) => vec![Arc::new(self.lower_expr(value))],
            None => Vec::new(),
        };
        let mut lhs = Vec::new();
        if let Some(alias) = node.child_by_field_name("alias") {
            for target in named(alias) {
                let kind = "type switch alias";
                lhs.push(Expr::Ident(self.declare(target, Binding::Other { kind })));
            }
        }
        stmts.push(Stmt::Assign {
            pos,
            lhs,
            rhs,
            define: true,
        });

        for case in named(node) {
            if matches!(case.kind(), "type_case" | "default_case") {
                stmts.extend(self.lower_stmt(case));
            }
        }

        self.scopes.pop();
        Stmt::Block { pos, stmts }
    }

    fn lower_func(&mut self, node: Node<'_>) -> Stmt {
        let name = node.child_by_field_name("name").map(|n| {
            let mut ident = self.unresolved(n);
            if node.kind() == "function_declaration" {
                ident.decl = self.lookup(&ident.name);
            }
            ident
        });
        let body = self.lower_func_body(node);
        Stmt::Func {
            pos: pos_of(node),
            name,
            body,
        }
    }

    /// Parameters and body share one scope.
    fn lower_func_body(&mut self, node: Node<'_>) -> Vec<Stmt> {
        self.scopes.push(Scope::new());

        if let Some(receiver) = node.child_by_field_name("receiver") {
            self.declare_params(receiver, "receiver");
        }
        if let Some(params) = node.child_by_field_name("type_parameters") {
            self.declare_params(params, "type parameter");
        }
        if let Some(params) = node.child_by_field_name("parameters") {
            self.declare_params(params, "parameter");
        }
        if let Some(result) = node.child_by_field_name("result") {
            if result.kind() == "parameter_list" {
                self.declare_params(result, "result");
            }
        }

        let body = match node.child_by_field_name("body") {
            Some(block) => self.lower_children(block),
            None => Vec::new(),
        };

        self.scopes.pop();
        body
    }

    fn lower_expr(&mut self, node: Node<'_>) -> Expr {
        let pos = pos_of(node);
        match node.kind() {
            "interpreted_string_literal" | "raw_string_literal" => {
                self.basic_lit(node, LitKind::String)
            }
            "int_literal" => self.basic_lit(node, LitKind::Int),
            "float_literal" => self.basic_lit(node, LitKind::Float),
            "imaginary_literal" => self.basic_lit(node, LitKind::Imag),
            "rune_literal" => self.basic_lit(node, LitKind::Char),
            "identifier" => {
                let name = self.text(node).to_string();
                let decl = self.lookup(&name);
                Expr::Ident(Ident { pos, name, decl })
            }
            "field_identifier" | "type_identifier" | "package_identifier" => {
                Expr::Ident(self.unresolved(node))
            }
            "selector_expression" => {
                let (Some(operand), Some(field)) = (
                    node.child_by_field_name("operand"),
                    node.child_by_field_name("field"),
                ) else {
                    return self.other(node);
                };
                Expr::Selector {
                    pos,
                    operand: Box::new(self.lower_expr(operand)),
                    field: self.unresolved(field),
                }
            }
            "call_expression" => {
                let Some(function) = node.child_by_field_name("function") else {
                    return self.other(node);
                };
                let func = self.lower_expr(function);
                let args = self.lower_list(node.child_by_field_name("arguments"));
                Expr::Call {
                    pos,
                    func: Box::new(func),
                    args,
                }
            }
            "binary_expression" => {
                let (Some(left), Some(op), Some(right)) = (
                    node.child_by_field_name("left"),
                    node.child_by_field_name("operator"),
                    node.child_by_field_name("right"),
                ) else {
                    return self.other(node);
                };
                Expr::Binary {
                    pos,
                    op: op.kind().to_string(),
                    left: Box::new(self.lower_expr(left)),
                    right: Box::new(self.lower_expr(right)),
                }
            }
            "unary_expression" => {
                let (Some(op), Some(operand)) = (
                    node.child_by_field_name("operator"),
                    node.child_by_field_name("operand"),
                ) else {
                    return self.other(node);
                };
                Expr::Unary {
                    pos,
                    op: op.kind().to_string(),
                    operand: Box::new(self.lower_expr(operand)),
                }
            }
            "parenthesized_expression" => match named(node).first() {
                Some(inner) => Expr::Paren {
                    pos,
                    inner: Box::new(self.lower_expr(*inner)),
                },
                None => self.other(node),
            },
            "composite_literal" => {
                let type_name = node
                    .child_by_field_name("type")
                    .map(|t| self.text(t).to_string());
                let elements = match node.child_by_field_name("body") {
                    Some(body) => self.lower_elements(body),
                    None => Vec::new(),
                };
                Expr::Composite {
                    pos,
                    type_name,
                    elements,
                }
            }
            "literal_value" => Expr::Composite {
                pos,
                type_name: None,
                elements: self.lower_elements(node),
            },
            "literal_element" => match named(node).first() {
                Some(inner) => self.lower_expr(*inner),
                None => self.other(node),
            },
            "func_literal" => Expr::FuncLit {
                pos,
                body: self.lower_func_body(node),
            },
            _ => self.other(node),
        }
    }

    fn basic_lit(&self, node: Node<'_>, kind: LitKind) -> Expr {
        Expr::BasicLit {
            pos: pos_of(node),
            kind,
            value: self.text(node).to_string(),
        }
    }

    fn other(&mut self, node: Node<'_>) -> Expr {
        let mut children = Vec::new();
        for child in named(node) {
            children.push(self.lower_expr(child));
        }
        Expr::Other {
            pos: pos_of(node),
            kind: node.kind().to_string(),
            children,
        }
    }

    fn lower_elements(&mut self, body: Node<'_>) -> Vec<Element> {
        let mut elements = Vec::new();
        for element in named(body) {
            if element.kind() != "keyed_element" {
                elements.push(Element::Value(self.lower_expr(element)));
                continue;
            }

            let parts = named(element);
            let key = element
                .child_by_field_name("key")
                .or_else(|| parts.first().copied());
            let value = element
                .child_by_field_name("value")
                .or_else(|| parts.last().copied());
            let (Some(key), Some(value)) = (key, value) else {
                continue;
            };

            let key = unwrap_literal_element(key);
            let key = match key.kind() {
                "identifier" | "field_identifier" => Expr::Ident(self.unresolved(key)),
                _ => self.lower_expr(key),
            };
            let value = self.lower_expr(value);
            elements.push(Element::Keyed { key, value });
        }
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::{walk_file, Visitor};
    use std::convert::Infallible;

    fn parse(src: &str) -> GoFile {
        GoParser::new().parse("m.go", src).expect("parse")
    }

    struct CallArgs {
        callee: &'static str,
        found: Vec<Vec<Expr>>,
    }

    impl Visitor for CallArgs {
        type Error = Infallible;

        fn visit_expr(&mut self, expr: &Expr) -> Result<(), Infallible> {
            if let Expr::Call { func, args, .. } = expr {
                if func.selected_name() == Some(self.callee) {
                    self.found.push(args.clone());
                }
            }
            Ok(())
        }
    }

    /// First argument of every `use(...)` call, in source order.
    fn used(file: &GoFile) -> Vec<Expr> {
        let mut visitor = CallArgs {
            callee: "use",
            found: Vec::new(),
        };
        walk_file(&mut visitor, file).expect("walk");
        visitor
            .found
            .into_iter()
            .map(|args| args.into_iter().next().expect("argument"))
            .collect()
    }

    fn binding<'f>(file: &'f GoFile, expr: &Expr) -> &'f Binding {
        let Expr::Ident(ident) = expr else {
            panic!("not an identifier: {expr:?}");
        };
        let id = ident.decl.expect("resolved identifier");
        &file.decl(id).expect("declaration").binding
    }

    fn bound_literal(file: &GoFile, expr: &Expr) -> String {
        let value = match binding(file, expr) {
            Binding::Assign { value } | Binding::ValueSpec { value, .. } => value.clone(),
            Binding::Other { kind } => panic!("bound to {kind}"),
        };
        match value.as_deref() {
            Some(Expr::BasicLit { value, .. }) => value.clone(),
            other => panic!("not a literal: {other:?}"),
        }
    }

    #[test]
    fn reads_package_name() {
        let file = parse("package metrics\n");
        assert_eq!(file.package.as_deref(), Some("metrics"));
        assert!(file.stmts.is_empty());
    }

    #[test]
    fn package_names_resolve_before_declaration() {
        let file = parse(
            r#"package m

func f() { use(name) }

var name = "x"
"#,
        );
        let uses = used(&file);
        assert_eq!(bound_literal(&file, &uses[0]), "\"x\"");
    }

    #[test]
    fn short_var_binds_by_index() {
        let file = parse(
            r#"package m

func f() {
	a, b := "x", "y"
	use(b)
	use(a)
}
"#,
        );
        let uses = used(&file);
        assert_eq!(bound_literal(&file, &uses[0]), "\"y\"");
        assert_eq!(bound_literal(&file, &uses[1]), "\"x\"");
    }

    #[test]
    fn redeclaration_keeps_first_binding() {
        let file = parse(
            r#"package m

func f() {
	a := "x"
	a, b := "y", "z"
	use(a)
	use(b)
}
"#,
        );
        let uses = used(&file);
        assert_eq!(bound_literal(&file, &uses[0]), "\"x\"");
        assert_eq!(bound_literal(&file, &uses[1]), "\"z\"");
    }

    #[test]
    fn inner_block_shadows_package_name() {
        let file = parse(
            r#"package m

var name = "outer"

func f() {
	{
		name := "inner"
		use(name)
	}
	use(name)
}
"#,
        );
        let uses = used(&file);
        assert_eq!(bound_literal(&file, &uses[0]), "\"inner\"");
        assert_eq!(bound_literal(&file, &uses[1]), "\"outer\"");
    }

    #[test]
    fn parameters_and_range_variables_are_not_values() {
        let file = parse(
            r#"package m

func f(desc string, xs []string) {
	use(desc)
	for _, v := range xs {
		use(v)
	}
}
"#,
        );
        let uses = used(&file);
        assert_eq!(
            binding(&file, &uses[0]),
            &Binding::Other { kind: "parameter" }
        );
        assert_eq!(
            binding(&file, &uses[1]),
            &Binding::Other {
                kind: "range variable"
            }
        );
    }

    #[test]
    fn const_without_initializer_has_no_value() {
        let file = parse(
            r#"package m

const (
	a = "x"
	b
)

func f() { use(b) }
"#,
        );
        let uses = used(&file);
        assert_eq!(
            binding(&file, &uses[0]),
            &Binding::ValueSpec {
                value: None,
                constant: true
            }
        );
    }

    #[test]
    fn imported_packages_are_unresolved() {
        let file = parse(
            r#"package m

import "fmt"

func f() { use(fmt.Sprint("x")) }
"#,
        );
        let uses = used(&file);
        let Expr::Call { func, .. } = &uses[0] else {
            panic!("expected call");
        };
        let Expr::Selector { operand, field, .. } = func.as_ref() else {
            panic!("expected selector");
        };
        assert_eq!(field.name, "Sprint");
        assert!(matches!(operand.as_ref(), Expr::Ident(Ident { decl: None, .. })));
    }

    #[test]
    fn composite_literal_keys_and_positions() {
        let file = parse(
            r#"package m

var opts = prometheus.CounterOpts{Name: "n", Help: "h"}
"#,
        );
        let Stmt::ValueDecl { specs, .. } = &file.stmts[0] else {
            panic!("expected value declaration");
        };
        let Expr::Composite {
            pos,
            type_name,
            elements,
        } = specs[0].values[0].as_ref()
        else {
            panic!("expected composite literal");
        };
        assert_eq!(type_name.as_deref(), Some("prometheus.CounterOpts"));
        assert_eq!((pos.line, pos.column), (3, 12));
        assert_eq!(elements.len(), 2);
        let Element::Keyed { key, value } = &elements[0] else {
            panic!("expected keyed element");
        };
        assert!(matches!(key, Expr::Ident(Ident { name, decl: None, .. }) if name == "Name"));
        assert!(matches!(value, Expr::BasicLit { value, .. } if value == "\"n\""));
    }

    #[test]
    fn send_statement_is_lowered() {
        let file = parse(
            r#"package m

func f(ch chan int) {
	ch <- 1
}
"#,
        );
        let Stmt::Func { body, .. } = &file.stmts[0] else {
            panic!("expected function");
        };
        fn has_send(stmts: &[Stmt]) -> bool {
            stmts.iter().any(|s| match s {
                Stmt::Send { .. } => true,
                Stmt::Block { stmts, .. } => has_send(stmts),
                _ => false,
            })
        }
        assert!(has_send(body));
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = GoParser::new()
            .parse("bad.go", "package m\n\nfunc f( {\n")
            .unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
        assert!(err.to_string().starts_with("bad.go:"));
    }
}

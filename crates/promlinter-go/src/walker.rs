//! Finds metric declarations in a parsed file.
//!
//! Two patterns are recognized:
//!
//! - direct constructors such as `prometheus.NewCounterVec(opts, labels)`,
//!   including dot-imported and `promauto` factory forms
//! - const metrics sent from a collector, such as
//!   `ch <- prometheus.MustNewConstMetric(desc, prometheus.CounterValue, v)`

use promlinter_core::{Issue, LintError, MetricDescriptor, MetricKind, Occurrences};
use tracing::debug;

use crate::ast::{Expr, GoFile, Pos, Stmt};
use crate::options::extract_options;
use crate::registry::{self, NEW_DESC_ARGS};
use crate::resolver::Resolver;
use crate::visit::{walk_file, Visitor};

/// Metric occurrences and structural issues found in one or more files.
#[derive(Debug, Default)]
pub struct Collection {
    /// Every resolved metric declaration, in discovery order.
    pub occurrences: Occurrences,
    /// Structural issues, reported in strict mode only.
    pub issues: Vec<Issue>,
}

impl Collection {
    /// Appends the findings of another collection.
    pub fn append(&mut self, other: Self) {
        self.occurrences.append(other.occurrences);
        self.issues.extend(other.issues);
    }
}

/// Collects metric declarations from `file`.
///
/// # Errors
///
/// Returns [`LintError::MalformedLiteral`] if a string literal cannot be
/// unquoted.
pub fn collect(file: &GoFile, strict: bool) -> Result<Collection, LintError> {
    let mut walker = MetricWalker {
        resolver: Resolver::new(file, strict),
        collection: Collection::default(),
    };
    walk_file(&mut walker, file)?;

    debug!(
        "{}: {} metric(s), {} structural issue(s)",
        file.path.display(),
        walker.collection.occurrences.len(),
        walker.collection.issues.len()
    );
    Ok(walker.collection)
}

/// Collects metric declarations from every file, each with its own walker.
///
/// # Errors
///
/// Stops at the first file that fails.
pub fn collect_all(files: &[GoFile], strict: bool) -> Result<Collection, LintError> {
    let mut all = Collection::default();
    for file in files {
        all.append(collect(file, strict)?);
    }
    Ok(all)
}

struct MetricWalker<'f> {
    resolver: Resolver<'f>,
    collection: Collection,
}

impl<'f> MetricWalker<'f> {
    fn file(&self) -> &'f GoFile {
        self.resolver.file()
    }

    fn report(&mut self, pos: Pos, text: String) {
        let position = self.file().position(pos);
        if self.resolver.strict() {
            self.collection.issues.push(Issue::structural(position, text));
        } else {
            debug!("{position}: {text}");
        }
    }

    fn direct_call(&mut self, pos: Pos, func: &Expr, args: &[Expr]) -> Result<(), LintError> {
        let Some(name) = func.selected_name() else {
            return Ok(());
        };
        let Some(ctor) = registry::direct_constructor(name) else {
            return Ok(());
        };

        let required = ctor.min_args();
        if args.len() < required {
            self.report(pos, format!("{name} should have at least {required} arguments"));
            if self.resolver.strict() {
                return Ok(());
            }
        }
        let Some(opts) = args.first() else {
            return Ok(());
        };

        // Reported at the options argument, where the name is written.
        let position = self.file().position(opts.pos());
        let Some(options) = extract_options(&self.resolver, opts, &mut self.collection.issues)?
        else {
            debug!("{position}: options of {name} are not resolvable, skipping");
            return Ok(());
        };

        let descriptor = MetricDescriptor::new(
            ctor.kind,
            options.record.fq_name(),
            options.help.unwrap_or_default(),
        );
        debug!("{position}: {} {:?}", descriptor.kind, descriptor.name);
        self.collection.occurrences.record(descriptor, position);
        Ok(())
    }

    fn const_metric_send(&mut self, value: &Expr) -> Result<(), LintError> {
        let Expr::Call { pos, func, args } = value else {
            return Ok(());
        };
        let Some(name) = func.selected_name() else {
            return Ok(());
        };
        let Some(ctor) = registry::const_constructor(name) else {
            return Ok(());
        };

        if args.len() < ctor.min_args {
            let text = format!("{name} should have at least {} arguments", ctor.min_args);
            self.report(*pos, text);
            if self.resolver.strict() {
                return Ok(());
            }
        }
        let Some(desc) = args.first() else {
            return Ok(());
        };
        let Some((fq_name, help)) = self.descriptor(desc)? else {
            return Ok(());
        };

        let kind = ctor.kind.unwrap_or_else(|| {
            args.get(1)
                .and_then(Expr::selected_name)
                .map_or(MetricKind::Untyped, registry::value_type_kind)
        });
        let position = self.file().position(*pos);
        debug!("{position}: const {kind} {fq_name:?}");
        self.collection
            .occurrences
            .record(MetricDescriptor::new(kind, fq_name, help), position);
        Ok(())
    }

    /// Name and help of the descriptor passed to a const-metric constructor.
    fn descriptor(&mut self, arg: &Expr) -> Result<Option<(String, String)>, LintError> {
        match arg {
            Expr::Call { pos, args, .. } => self.new_desc(*pos, args),
            Expr::Ident(ident) => {
                let file = self.file();
                let Some(decl) = ident.decl.and_then(|id| file.decl(id)) else {
                    return Ok(None);
                };
                if let Some(Expr::Call { pos, args, .. }) = decl.value().map(|v| &**v) {
                    return self.new_desc(*pos, args);
                }
                self.report(
                    ident.pos,
                    format!("parsing desc of type {} is not supported", decl.describe()),
                );
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn new_desc(&mut self, pos: Pos, args: &[Expr]) -> Result<Option<(String, String)>, LintError> {
        if args.len() != NEW_DESC_ARGS {
            self.report(pos, format!("NewDesc should have {NEW_DESC_ARGS} args"));
            if self.resolver.strict() {
                return Ok(None);
            }
        }
        let (Some(fq_name), Some(help)) = (args.first(), args.get(1)) else {
            return Ok(None);
        };

        let issues = &mut self.collection.issues;
        let Some(fq_name) = self.resolver.resolve("fqName", fq_name, issues)? else {
            return Ok(None);
        };
        let Some(help) = self.resolver.resolve("help", help, issues)? else {
            return Ok(None);
        };
        Ok(Some((fq_name, help)))
    }
}

impl Visitor for MetricWalker<'_> {
    type Error = LintError;

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), LintError> {
        if let Stmt::Send { value, .. } = stmt {
            self.const_metric_send(value)?;
        }
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), LintError> {
        if let Expr::Call { pos, func, args } = expr {
            self.direct_call(*pos, func, args)?;
        }
        Ok(())
    }
}

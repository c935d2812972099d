//! Extraction of naming options from `prometheus.*Opts` literals.

use promlinter_core::{build_fq_name, Issue, LintError};
use tracing::debug;

use crate::ast::{Element, Expr};
use crate::resolver::Resolver;

/// Naming fields of an options literal. Unset fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRecord {
    /// `Namespace` field.
    pub namespace: String,
    /// `Subsystem` field.
    pub subsystem: String,
    /// `Name` field.
    pub name: String,
}

impl OptionRecord {
    /// Fully qualified metric name.
    #[must_use]
    pub fn fq_name(&self) -> String {
        build_fq_name(&self.namespace, &self.subsystem, &self.name)
    }
}

/// Options and help text read from one literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedOptions {
    /// Naming fields.
    pub record: OptionRecord,
    /// `Help` field, if present.
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionField {
    Namespace,
    Subsystem,
    Name,
    Help,
}

impl OptionField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "Namespace" => Some(Self::Namespace),
            "Subsystem" => Some(Self::Subsystem),
            "Name" => Some(Self::Name),
            "Help" => Some(Self::Help),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "Namespace",
            Self::Subsystem => "Subsystem",
            Self::Name => "Name",
            Self::Help => "Help",
        }
    }
}

/// Reads the options passed as the first argument of a metric constructor.
///
/// Accepts a composite literal, or an identifier whose declaration binds
/// one directly. Returns `Ok(None)` when the argument has another shape or
/// when any naming field fails to resolve; other fields are ignored.
///
/// # Errors
///
/// Propagates fatal errors from the [`Resolver`].
pub fn extract_options(
    resolver: &Resolver<'_>,
    arg: &Expr,
    issues: &mut Vec<Issue>,
) -> Result<Option<ExtractedOptions>, LintError> {
    match arg {
        Expr::Composite { elements, .. } => extract_composite(resolver, elements, issues),
        Expr::Ident(ident) => {
            let value = ident
                .decl
                .and_then(|id| resolver.file().decl(id))
                .and_then(|decl| decl.value());
            match value.map(|v| &**v) {
                Some(Expr::Composite { elements, .. }) => {
                    extract_composite(resolver, elements, issues)
                }
                _ => Ok(None),
            }
        }
        _ => Ok(None),
    }
}

fn extract_composite(
    resolver: &Resolver<'_>,
    elements: &[Element],
    issues: &mut Vec<Issue>,
) -> Result<Option<ExtractedOptions>, LintError> {
    let mut options = ExtractedOptions::default();

    for element in elements {
        let Element::Keyed {
            key: Expr::Ident(key),
            value,
        } = element
        else {
            continue;
        };
        let Some(field) = OptionField::from_key(&key.name) else {
            continue;
        };

        let Some(text) = resolver.resolve(field.as_str(), value, issues)? else {
            debug!(
                "{}: {} is not a constant string, skipping metric",
                resolver.file().position(value.pos()),
                field.as_str()
            );
            return Ok(None);
        };

        match field {
            OptionField::Namespace => options.record.namespace = text,
            OptionField::Subsystem => options.record.subsystem = text,
            OptionField::Name => options.record.name = text,
            OptionField::Help => options.help = Some(text),
        }
    }

    Ok(Some(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{GoFile, Stmt};
    use crate::parser::GoParser;

    fn parse(src: &str) -> GoFile {
        GoParser::new().parse("o.go", src).expect("parse")
    }

    /// Extracts options from the initializer of the last package-level var.
    fn extract(src: &str, strict: bool) -> (Option<ExtractedOptions>, Vec<Issue>) {
        let file = parse(src);
        let value = file
            .stmts
            .iter()
            .rev()
            .find_map(|s| match s {
                Stmt::ValueDecl { specs, .. } => {
                    specs.last().and_then(|spec| spec.values.last()).cloned()
                }
                _ => None,
            })
            .expect("initializer");
        let mut issues = Vec::new();
        let options = extract_options(&Resolver::new(&file, strict), &value, &mut issues)
            .expect("extract");
        (options, issues)
    }

    #[test]
    fn reads_all_naming_fields() {
        let (options, issues) = extract(
            r#"package o

var opts = prometheus.CounterOpts{
	Namespace:   "app",
	Subsystem:   "http",
	Name:        "requests_total",
	Help:        "Requests served.",
	ConstLabels: prometheus.Labels{"a": compute()},
}
"#,
            true,
        );
        let options = options.expect("options");
        assert_eq!(options.record.fq_name(), "app_http_requests_total");
        assert_eq!(options.help.as_deref(), Some("Requests served."));
        assert!(issues.is_empty());
    }

    #[test]
    fn missing_help_is_none() {
        let (options, _) = extract("package o\nvar opts = GaugeOpts{Name: \"g\"}\n", false);
        let options = options.expect("options");
        assert_eq!(options.record.name, "g");
        assert_eq!(options.help, None);
    }

    #[test]
    fn identifier_is_followed_one_hop() {
        let src = r#"package o

var base = prometheus.GaugeOpts{Name: "depth", Help: "h"}
var opts = base
"#;
        let (options, _) = extract(src, false);
        assert_eq!(options.expect("options").record.name, "depth");

        let two_hops = format!("{src}var alias = opts\n");
        let (options, issues) = extract(&two_hops, true);
        assert!(options.is_none());
        assert!(issues.is_empty());
    }

    #[test]
    fn unresolvable_field_aborts_extraction() {
        let src = "package o\nvar opts = CounterOpts{Name: name(), Help: \"h\"}\n";

        let (options, issues) = extract(src, true);
        assert!(options.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].text.starts_with("parsing field Name with type"));

        let (options, issues) = extract(src, false);
        assert!(options.is_none());
        assert!(issues.is_empty());
    }

    #[test]
    fn other_shapes_are_not_options() {
        let (options, issues) = extract("package o\nvar opts = newOpts()\n", true);
        assert!(options.is_none());
        assert!(issues.is_empty());
    }
}

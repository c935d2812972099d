//! Shared output formatting for lint results and metric listings.

use anyhow::Result;
use miette::NamedSource;
use promlinter::{IssueDiagnostic, LintResult, MetricOccurrence};
use serde::Serialize;
use std::path::Path;

use crate::{ListFormat, OutputFormat};

/// Print lint results in the specified format.
pub fn print_issues(result: &LintResult, root: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for issue in &result.issues {
        match issue.metric.as_deref() {
            Some(metric) if !metric.is_empty() => println!("{} {metric}", issue.position),
            _ => println!("{}", issue.position),
        }
        println!("  \x1b[33missue\x1b[0m: {}", issue.text);
        println!();
    }
    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (structural, metric) = result.count_by_origin();
    let color = if result.has_issues() {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{color}Found {} issue(s) ({structural} structural, {metric} metric) across {} metric(s) in {} file(s)\x1b[0m",
        result.issues.len(),
        result.metrics.len(),
        result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for issue in &result.issues {
        println!("{issue}");
    }
}

fn print_pretty(result: &LintResult, root: &Path) {
    for issue in &result.issues {
        let diagnostic = IssueDiagnostic::from(issue);
        let name = issue.position.file.display().to_string();

        let report = match std::fs::read_to_string(root.join(&issue.position.file)) {
            Ok(content) => {
                miette::Report::new(diagnostic).with_source_code(NamedSource::new(name, content))
            }
            Err(e) => {
                tracing::debug!("No source snippet for {name}: {e}");
                miette::Report::new(diagnostic)
            }
        };
        println!("{report:?}");
    }
    print_summary(result);
}

/// One row of a metric listing.
#[derive(Debug, Serialize)]
struct MetricRow<'a> {
    position: String,
    name: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'a str>,
}

impl<'a> MetricRow<'a> {
    fn new(metric: &'a MetricOccurrence, add_help: bool) -> Self {
        Self {
            position: metric.position.to_string(),
            name: &metric.descriptor.name,
            kind: metric.descriptor.kind.as_str(),
            help: add_help.then_some(metric.descriptor.help.as_str()),
        }
    }
}

/// Print a metric listing in the specified format.
pub fn print_metrics(
    metrics: &[MetricOccurrence],
    add_help: bool,
    format: ListFormat,
) -> Result<()> {
    let rows: Vec<MetricRow<'_>> = metrics
        .iter()
        .map(|m| MetricRow::new(m, add_help))
        .collect();

    match format {
        ListFormat::Text => print!("{}", format_table(&rows, add_help)),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        ListFormat::Compact => {
            for row in &rows {
                match row.help {
                    Some(help) => println!("{} {} {} {help:?}", row.position, row.name, row.kind),
                    None => println!("{} {} {}", row.position, row.name, row.kind),
                }
            }
        }
    }
    Ok(())
}

fn format_table(rows: &[MetricRow<'_>], add_help: bool) -> String {
    let mut header = vec!["POSITION", "METRIC NAME", "METRIC TYPE"];
    if add_help {
        header.push("HELP");
    }

    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.position.as_str(), row.name, row.kind];
            if let Some(help) = row.help {
                cells.push(help);
            }
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&cells) {
        let last = line.len().saturating_sub(1);
        for (i, (cell, width)) in line.iter().zip(&widths).enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{cell:<width$}  "));
            }
        }
        out.push('\n');
    }
    out
}

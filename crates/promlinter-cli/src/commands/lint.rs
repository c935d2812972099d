//! Lint command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line options of the lint command.
#[derive(Debug, Default)]
pub struct Options {
    /// Force strict mode.
    pub strict: bool,
    /// Checks to disable on top of the configuration.
    pub disable: Vec<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Output format.
    pub format: OutputFormat,
}

/// Runs the lint command. Exits with status 1 when any issue is found.
pub fn run(path: Option<&Path>, options: &Options, source: &ConfigSource) -> Result<()> {
    let builder = super::analyzer_builder(path, options.strict, source)?
        .disables(options.disable.iter().map(|s| s.trim().to_string()))
        .excludes(options.exclude.iter().cloned());
    let analyzer = super::build(builder)?;

    tracing::info!(
        "Linting {} (strict: {}, disabled: {:?})",
        analyzer.root().display(),
        analyzer.is_strict(),
        analyzer.disabled_checks()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print_issues(&result, analyzer.root(), options.format)?;

    if result.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}

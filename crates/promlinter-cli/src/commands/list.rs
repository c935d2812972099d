//! List command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::ListFormat;

/// Runs the list command.
pub fn run(
    path: Option<&Path>,
    strict: bool,
    add_help: bool,
    format: ListFormat,
    source: &ConfigSource,
) -> Result<()> {
    let analyzer = super::build(super::analyzer_builder(path, strict, source)?)?;

    tracing::info!("Listing metrics under {}", analyzer.root().display());

    let metrics = analyzer.metrics().context("Analysis failed")?;
    super::output::print_metrics(&metrics, add_help, format)
}

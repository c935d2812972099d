//! Subcommand implementations.

pub mod init;
pub mod lint;
pub mod list;
pub mod list_checks;
pub mod output;

use anyhow::{Context, Result};
use promlinter::{Analyzer, AnalyzerBuilder};
use std::path::Path;

use crate::config_resolver::ConfigSource;

/// Starts an analyzer builder from the resolved configuration.
///
/// An explicit `path` overrides the configured root.
fn analyzer_builder(
    path: Option<&Path>,
    strict: bool,
    source: &ConfigSource,
) -> Result<AnalyzerBuilder> {
    let config = source.load()?;
    let mut builder = Analyzer::builder().config(config);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    if strict {
        builder = builder.strict(true);
    }
    Ok(builder)
}

fn build(builder: AnalyzerBuilder) -> Result<Analyzer> {
    builder.build().context("Failed to build analyzer")
}

//! promlinter CLI tool.
//!
//! Usage:
//! ```bash
//! promlinter list [OPTIONS] [PATH]
//! promlinter lint [OPTIONS] [PATH]
//! promlinter list-checks
//! promlinter init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for Prometheus metric declarations in Go source code
#[derive(Parser)]
#[command(name = "promlinter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PROMLINTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List metrics declared in Go files
    List {
        /// Path to analyze (default: configured root)
        path: Option<PathBuf>,

        /// Report malformed metric call sites
        #[arg(long)]
        strict: bool,

        /// Include help text
        #[arg(long)]
        add_help: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: ListFormat,
    },

    /// Lint metrics declared in Go files
    Lint {
        /// Path to analyze (default: configured root)
        path: Option<PathBuf>,

        /// Report malformed metric call sites
        #[arg(long)]
        strict: bool,

        /// Checks to disable, by name or code (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        disable: Vec<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available checks
    ListChecks,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-issue compact format.
    Compact,
    /// Rich diagnostics with source snippets.
    Pretty,
}

/// Output format for metric listings.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ListFormat {
    /// Aligned table.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-metric compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            path,
            strict,
            add_help,
            format,
        } => {
            let source = resolve_config(path.as_deref(), cli.config.as_deref());
            commands::list::run(path.as_deref(), strict, add_help, format, &source)
        }
        Commands::Lint {
            path,
            strict,
            disable,
            exclude,
            format,
        } => {
            let source = resolve_config(path.as_deref(), cli.config.as_deref());
            let options = commands::lint::Options {
                strict,
                disable,
                exclude,
                format,
            };
            commands::lint::run(path.as_deref(), &options, &source)
        }
        Commands::ListChecks => {
            commands::list_checks::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}

/// Looks for a config file next to the analyzed path, or in the current
/// directory when no path is given.
fn resolve_config(
    path: Option<&std::path::Path>,
    explicit: Option<&std::path::Path>,
) -> config_resolver::ConfigSource {
    let project = path.unwrap_or_else(|| std::path::Path::new("."));
    config_resolver::resolve(project, explicit)
}

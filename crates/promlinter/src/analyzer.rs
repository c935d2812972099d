//! Directory analyzer: discovers Go files, collects their metrics and lints
//! them.

use promlinter_core::{
    lint_occurrences, Config, ConfigError, LintError, LintResult, MetricOccurrence,
};
use promlinter_go::{collect, Collection, GoParser, ParseError};
use promlinter_rules::{is_known_check, PromLint};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Go source file.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Error walking the directory tree.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A fatal lint condition.
    #[error(transparent)]
    Lint(#[from] LintError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    exclude_patterns: Vec<String>,
    disabled_checks: Vec<String>,
    strict: Option<bool>,
    skip_tests: Option<bool>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds an exclude glob pattern, matched against paths relative to the
    /// root.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Disables a check by name or code.
    #[must_use]
    pub fn disable(mut self, check: impl Into<String>) -> Self {
        self.disabled_checks.push(check.into());
        self
    }

    /// Disables several checks by name or code.
    #[must_use]
    pub fn disables<I, S>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_checks
            .extend(checks.into_iter().map(Into::into));
        self
    }

    /// Reports malformed call sites as issues. Overrides the configuration.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Skips `_test.go` files. Overrides the configuration.
    #[must_use]
    pub fn skip_tests(mut self, skip: bool) -> Self {
        self.skip_tests = Some(skip);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut patterns = self.exclude_patterns;
        patterns.extend(config.analyzer.exclude.iter().cloned());
        let exclude = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut disabled_checks = config.disabled_checks();
        disabled_checks.extend(self.disabled_checks);
        for check in &disabled_checks {
            if !is_known_check(check) {
                warn!("Ignoring unknown check in disabled list: {check}");
            }
        }

        Ok(Analyzer {
            root,
            exclude,
            disabled_checks,
            strict: self.strict.unwrap_or(config.strict),
            skip_tests: self.skip_tests.unwrap_or(config.analyzer.skip_tests),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// Lints every Go file below a root directory.
///
/// Use [`Analyzer::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Analyzer {
    root: PathBuf,
    exclude: Vec<glob::Pattern>,
    disabled_checks: Vec<String>,
    strict: bool,
    skip_tests: bool,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if structural issues are reported.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the checks disabled for this analyzer.
    #[must_use]
    pub fn disabled_checks(&self) -> &[String] {
        &self.disabled_checks
    }

    /// Collects and lints all metrics below the root.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, a file cannot be read, or
    /// a fatal lint condition occurs. Unparsable files are skipped unless
    /// `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {}", self.root.display());

        let (collection, files_checked) = self.collect_files()?;
        let validator = PromLint::new().disable(&self.disabled_checks);
        let issues = lint_occurrences(&collection.occurrences, collection.issues, &validator)?;

        let result = LintResult {
            issues,
            metrics: collection.occurrences.into_sorted(),
            files_checked,
        };

        info!(
            "Analysis complete: {} issue(s), {} metric(s) in {} file(s)",
            result.issues.len(),
            result.metrics.len(),
            result.files_checked
        );
        Ok(result)
    }

    /// Collects all metrics below the root without linting them.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Analyzer::analyze`], except validator failures.
    pub fn metrics(&self) -> Result<Vec<MetricOccurrence>, AnalyzerError> {
        let (collection, _) = self.collect_files()?;
        Ok(collection.occurrences.into_sorted())
    }

    /// Runs an independent walker over every discovered file and merges
    /// the findings.
    fn collect_files(&self) -> Result<(Collection, usize), AnalyzerError> {
        let files = self.discover_files()?;
        info!("Found {} Go file(s) to analyze", files.len());

        let parser = GoParser::new();
        let mut all = Collection::default();
        let mut files_checked = 0;

        for path in &files {
            match self.collect_file(&parser, path) {
                Ok(collection) => {
                    all.append(collection);
                    files_checked += 1;
                }
                Err(AnalyzerError::Parse(e)) => {
                    warn!("Skipping unparsable file: {e}");
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse(e));
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Ok((all, files_checked))
    }

    fn collect_file(&self, parser: &GoParser, path: &Path) -> Result<Collection, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let source = std::fs::read_to_string(path)?;
        let file = parser.parse(self.display_path(path), &source)?;
        Ok(collect(&file, self.strict)?)
    }

    /// Path used in reported positions.
    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }

    /// Discovers all Go source files to analyze, honoring `.gitignore`.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder.hidden(true).git_ignore(true).require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("go") {
                continue;
            }
            if self.skip_tests && is_test_file(path) {
                debug!("Skipping test file: {}", path.display());
                continue;
            }
            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path matches an exclude pattern.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = self.display_path(path);
        self.exclude
            .iter()
            .any(|pattern| pattern.matches_path(&relative))
    }
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("_test.go"))
}

//! Integration test: directory analysis end-to-end via Analyzer.
//!
//! Uses fixture packages under `tests/fixtures/` to verify discovery,
//! exclusion, metric collection and linting together.

use promlinter::go::ParseError;
use promlinter::{Analyzer, AnalyzerError, Config, LintResult};
use std::path::PathBuf;

fn fixture_root(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn analyze(builder: promlinter::AnalyzerBuilder) -> LintResult {
    builder
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed")
}

fn metric_names(result: &LintResult) -> Vec<&str> {
    result
        .metrics
        .iter()
        .map(|m| m.descriptor.name.as_str())
        .collect()
}

fn issue_lines(result: &LintResult) -> Vec<String> {
    result.issues.iter().map(ToString::to_string).collect()
}

// ── Lenient mode ──

#[test]
fn lenient_reports_only_resolved_metrics() {
    let result = analyze(Analyzer::builder().root(fixture_root("service")));

    assert_eq!(result.files_checked, 3);
    assert_eq!(
        metric_names(&result),
        vec![
            "shop_jobs_processed",
            "shop_orders_total",
            "shop_cart_items",
            "shop_checkout_duration_milliseconds",
            "test_gauge",
        ]
    );

    let lines = issue_lines(&result);
    assert_eq!(
        lines,
        vec![
            "collector.go:23:8: shop_jobs_processed: counter metrics should have \"_total\" suffix",
            "metrics.go:17:33: shop_cart_items: no help text",
            "metrics.go:23:44: shop_checkout_duration_milliseconds: use base unit \"seconds\" instead of \"milliseconds\"",
            "metrics_test.go:5:37: test_gauge: metric name should not include type 'gauge'",
        ]
    );
    assert_eq!(result.count_by_origin(), (0, 4));
}

// ── Strict mode ──

#[test]
fn strict_adds_structural_issues() {
    let result = analyze(Analyzer::builder().root(fixture_root("service")).strict(true));

    let structural: Vec<String> = result
        .issues
        .iter()
        .filter(|i| i.metric.is_none())
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        structural,
        vec![
            "collector.go:6:2: parsing field fqName with type call expression is not supported",
            "metrics.go:30:27: parsing field Name with type call expression is not supported",
        ]
    );

    // Unresolvable metrics are never reported, strict or not.
    assert_eq!(result.metrics.len(), 5);
    assert!(result.issues_for("shop_payment_errors_total").is_empty());
}

#[test]
fn issues_are_sorted_by_position() {
    let result = analyze(Analyzer::builder().root(fixture_root("service")).strict(true));

    let positions: Vec<String> = result
        .issues
        .iter()
        .map(|i| i.position.to_string())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

// ── Discovery ──

#[test]
fn skip_tests_drops_test_files() {
    let result = analyze(
        Analyzer::builder()
            .root(fixture_root("service"))
            .skip_tests(true),
    );

    assert_eq!(result.files_checked, 2);
    assert!(!metric_names(&result).contains(&"test_gauge"));
}

#[test]
fn vendor_is_excluded_by_default() {
    let result = analyze(Analyzer::builder().root(fixture_root("service")));
    assert!(!metric_names(&result).contains(&"vendored_requests_total"));

    let config = Config::parse("[analyzer]\nexclude = []\n").expect("config");
    let result = analyze(
        Analyzer::builder()
            .root(fixture_root("service"))
            .config(config),
    );
    assert!(metric_names(&result).contains(&"vendored_requests_total"));
}

#[test]
fn gitignored_files_are_skipped() {
    let config = Config::parse("[analyzer]\nexclude = []\n").expect("config");
    let result = analyze(
        Analyzer::builder()
            .root(fixture_root("service"))
            .config(config),
    );
    assert!(!metric_names(&result).contains(&"generated_gauge_value"));
}

// ── Checks ──

#[test]
fn config_disables_checks() {
    let config = Config::parse(
        r#"
[checks.help]
enabled = false

[checks.PL002]
enabled = false
"#,
    )
    .expect("config");

    let result = analyze(
        Analyzer::builder()
            .root(fixture_root("service"))
            .config(config)
            .disable("counter"),
    );

    assert_eq!(
        issue_lines(&result),
        vec!["metrics_test.go:5:37: test_gauge: metric name should not include type 'gauge'"]
    );
}

#[test]
fn metrics_match_analysis() {
    let analyzer = Analyzer::builder()
        .root(fixture_root("service"))
        .build()
        .expect("analyzer should build");

    let listed = analyzer.metrics().expect("metrics");
    let analyzed = analyzer.analyze().expect("analysis");
    assert_eq!(listed, analyzed.metrics);
}

// ── Parse errors ──

#[test]
fn unparsable_files_are_skipped() {
    let result = analyze(Analyzer::builder().root(fixture_root("broken")));

    assert_eq!(result.files_checked, 1);
    assert_eq!(metric_names(&result), vec!["up"]);
    assert!(result.issues.is_empty());
}

#[test]
fn unparsable_files_fail_when_requested() {
    let err = Analyzer::builder()
        .root(fixture_root("broken"))
        .fail_on_parse_error(true)
        .build()
        .expect("analyzer should build")
        .analyze()
        .unwrap_err();

    match err {
        AnalyzerError::Parse(ParseError::Syntax { path, line, .. }) => {
            assert_eq!(path, PathBuf::from("bad.go"));
            assert!(line >= 3);
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

// ── Temporary trees ──

#[test]
fn identical_declarations_are_reported_separately() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = r#"package dup

import "github.com/prometheus/client_golang/prometheus"

var a = prometheus.NewGauge(prometheus.GaugeOpts{Name: "queue_size"})
var b = prometheus.NewGauge(prometheus.GaugeOpts{Name: "queue_size"})
"#;
    std::fs::write(dir.path().join("dup.go"), source).expect("write");

    let result = analyze(Analyzer::builder().root(dir.path()));

    assert_eq!(result.metrics.len(), 2);
    assert_eq!(
        issue_lines(&result),
        vec![
            "dup.go:5:29: queue_size: no help text",
            "dup.go:6:29: queue_size: no help text",
        ]
    );
    assert_eq!(result.issues_for("queue_size").len(), 2);
}

#[test]
fn empty_tree_has_no_findings() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("README.md"), "# nothing here\n").expect("write");

    let result = analyze(Analyzer::builder().root(dir.path()));
    assert_eq!(result.files_checked, 0);
    assert!(!result.has_issues());
    assert!(result.metrics.is_empty());
}

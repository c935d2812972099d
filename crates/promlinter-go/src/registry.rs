//! Known metric constructors.
//!
//! Supporting another constructor is a table edit here; the walker only
//! consults these lookups.

use promlinter_core::MetricKind;

/// A constructor taking an options struct as its first argument, e.g.
/// `prometheus.NewCounterVec(opts, labels)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectConstructor {
    /// Function or method name.
    pub name: &'static str,
    /// Kind of the metric it creates.
    pub kind: MetricKind,
}

impl DirectConstructor {
    /// Minimum number of arguments: options, plus label names for the
    /// `Vec` forms.
    #[must_use]
    pub fn min_args(&self) -> usize {
        if self.name.ends_with("Vec") {
            2
        } else {
            1
        }
    }
}

/// A constructor building a metric from a descriptor, used in
/// `ch <- prometheus.MustNewConstMetric(desc, ...)` collectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstConstructor {
    /// Function name.
    pub name: &'static str,
    /// Minimum number of arguments.
    pub min_args: usize,
    /// Fixed metric kind, or `None` when the second argument names the
    /// value type.
    pub kind: Option<MetricKind>,
}

/// Arguments a descriptor constructor takes: name, help, variable labels
/// and constant labels.
pub const NEW_DESC_ARGS: usize = 4;

const DIRECT: &[DirectConstructor] = &[
    direct("NewCounter", MetricKind::Counter),
    direct("NewCounterVec", MetricKind::Counter),
    direct("NewGauge", MetricKind::Gauge),
    direct("NewGaugeVec", MetricKind::Gauge),
    direct("NewHistogram", MetricKind::Histogram),
    direct("NewHistogramVec", MetricKind::Histogram),
    direct("NewSummary", MetricKind::Summary),
    direct("NewSummaryVec", MetricKind::Summary),
];

const CONST: &[ConstConstructor] = &[
    ConstConstructor {
        name: "MustNewConstMetric",
        min_args: 3,
        kind: None,
    },
    ConstConstructor {
        name: "MustNewHistogram",
        min_args: 4,
        kind: Some(MetricKind::Histogram),
    },
    ConstConstructor {
        name: "MustNewSummary",
        min_args: 4,
        kind: Some(MetricKind::Summary),
    },
];

const fn direct(name: &'static str, kind: MetricKind) -> DirectConstructor {
    DirectConstructor { name, kind }
}

/// Looks up a direct constructor by name.
#[must_use]
pub fn direct_constructor(name: &str) -> Option<&'static DirectConstructor> {
    DIRECT.iter().find(|c| c.name == name)
}

/// Looks up a const-metric constructor by name.
#[must_use]
pub fn const_constructor(name: &str) -> Option<&'static ConstConstructor> {
    CONST.iter().find(|c| c.name == name)
}

/// Maps a value type name such as `CounterValue` to a metric kind.
#[must_use]
pub fn value_type_kind(name: &str) -> MetricKind {
    match name {
        "CounterValue" => MetricKind::Counter,
        "GaugeValue" => MetricKind::Gauge,
        _ => MetricKind::Untyped,
    }
}

/// All direct constructors.
#[must_use]
pub fn direct_constructors() -> &'static [DirectConstructor] {
    DIRECT
}

/// All const-metric constructors.
#[must_use]
pub fn const_constructors() -> &'static [ConstConstructor] {
    CONST
}

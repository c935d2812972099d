//! Metric descriptors and the occurrence arena that records where each one
//! was declared.

use serde::{Deserialize, Serialize};

use crate::types::SourcePosition;

/// Kind of a metric instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Monotonic counter.
    Counter,
    /// Gauge.
    Gauge,
    /// Histogram.
    Histogram,
    /// Summary.
    Summary,
    /// Untyped metric.
    Untyped,
}

impl MetricKind {
    /// Returns the lowercase name used in metric type names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Gauge => "gauge",
            Self::Histogram => "histogram",
            Self::Summary => "summary",
            Self::Untyped => "untyped",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved kind, fully qualified name and help text of one metric
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    /// Instrument kind.
    pub kind: MetricKind,
    /// Fully qualified metric name.
    pub name: String,
    /// Help text, empty when none was given.
    pub help: String,
}

impl MetricDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(kind: MetricKind, name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            help: help.into(),
        }
    }
}

/// Joins namespace, subsystem and name with `_`, skipping empty segments.
///
/// Follows the Prometheus client convention: an empty `name` yields an empty
/// fully qualified name no matter what the other segments hold.
#[must_use]
pub fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    [namespace, subsystem, name]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// Handle to one recorded occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceId(usize);

impl OccurrenceId {
    /// Index of the occurrence in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A metric descriptor together with the position it was declared at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOccurrence {
    /// The resolved descriptor.
    pub descriptor: MetricDescriptor,
    /// Declaration site.
    pub position: SourcePosition,
}

/// Arena of metric occurrences.
///
/// Two declarations with identical descriptors are kept as separate
/// entries; nothing here compares descriptors by value.
#[derive(Debug, Clone, Default)]
pub struct Occurrences {
    entries: Vec<MetricOccurrence>,
}

impl Occurrences {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a descriptor found at `position`.
    pub fn record(
        &mut self,
        descriptor: MetricDescriptor,
        position: SourcePosition,
    ) -> OccurrenceId {
        let id = OccurrenceId(self.entries.len());
        self.entries.push(MetricOccurrence {
            descriptor,
            position,
        });
        id
    }

    /// Looks up an occurrence by handle.
    #[must_use]
    pub fn get(&self, id: OccurrenceId) -> Option<&MetricOccurrence> {
        self.entries.get(id.0)
    }

    /// Number of recorded occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates occurrences in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (OccurrenceId, &MetricOccurrence)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, occurrence)| (OccurrenceId(i), occurrence))
    }

    /// Appends all occurrences of `other`, keeping their relative order.
    pub fn append(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Consumes the arena, returning occurrences ordered by position text.
    #[must_use]
    pub fn into_sorted(self) -> Vec<MetricOccurrence> {
        let mut entries = self.entries;
        entries.sort_by_cached_key(|m| m.position.to_string());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fq_name_joins_non_empty_segments() {
        assert_eq!(build_fq_name("ns", "sub", "name"), "ns_sub_name");
        assert_eq!(build_fq_name("", "sub", "name"), "sub_name");
        assert_eq!(build_fq_name("ns", "", "name"), "ns_name");
        assert_eq!(build_fq_name("", "", "name"), "name");
    }

    #[test]
    fn fq_name_is_empty_without_name() {
        assert_eq!(build_fq_name("ns", "sub", ""), "");
    }

    #[test]
    fn identical_descriptors_stay_distinct() {
        let mut arena = Occurrences::new();
        let d = MetricDescriptor::new(MetricKind::Counter, "requests_total", "help");
        let a = arena.record(d.clone(), SourcePosition::new("a.go", 3, 4));
        let b = arena.record(d, SourcePosition::new("a.go", 9, 4));

        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(|o| o.position.line), Some(3));
        assert_eq!(arena.get(b).map(|o| o.position.line), Some(9));
    }

    #[test]
    fn into_sorted_orders_by_position_text() {
        let mut arena = Occurrences::new();
        let d = MetricDescriptor::new(MetricKind::Gauge, "g", "h");
        arena.record(d.clone(), SourcePosition::new("b.go", 1, 1));
        arena.record(d, SourcePosition::new("a.go", 2, 1));
        let sorted = arena.into_sorted();
        assert_eq!(sorted[0].position.file.to_string_lossy(), "a.go");
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(MetricKind::Histogram.to_string(), "histogram");
        assert_eq!(MetricKind::Untyped.as_str(), "untyped");
    }
}

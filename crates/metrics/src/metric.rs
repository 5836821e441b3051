//! Metric identities.

use std::sync::Arc;

/// The aggregation a metric applies to its samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Collects every sample and reports distribution statistics.
    Trend,
    /// Sums sample values over the run.
    Counter,
    /// Keeps only the most recent sample value.
    Gauge,
}

/// The unit attached to a metric's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Plain, unitless values.
    #[default]
    Default,
    /// Values are durations expressed in milliseconds.
    Milliseconds,
}

#[derive(Debug)]
struct MetricInner {
    name: String,
    kind: MetricKind,
    unit: Unit,
}

/// A handle to a declared metric.
///
/// Handles are cheap to clone and compare by identity: two handles are equal
/// only if they came from the same registration.
#[derive(Debug, Clone)]
pub struct Metric {
    inner: Arc<MetricInner>,
}

impl Metric {
    pub(crate) fn new(name: String, kind: MetricKind, unit: Unit) -> Self {
        Self { inner: Arc::new(MetricInner { name, kind, unit }) }
    }

    /// The registered name of the metric.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The aggregation kind of the metric.
    pub fn kind(&self) -> MetricKind {
        self.inner.kind
    }

    /// The unit of the metric's values.
    pub fn unit(&self) -> Unit {
        self.inner.unit
    }
}

impl PartialEq for Metric {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Metric {}

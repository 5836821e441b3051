//! Timestamped metric samples.

use crate::Metric;
use std::{collections::BTreeMap, time::SystemTime};

/// Tags qualifying a sample. Keys are unique.
pub type SampleTags = BTreeMap<String, String>;

/// One metric data point.
///
/// Immutable once constructed; ownership moves to the sink on push.
#[derive(Debug, Clone)]
pub struct Sample {
    /// The metric this sample belongs to.
    pub metric: Metric,
    /// Key-value tags qualifying the sample.
    pub tags: SampleTags,
    /// The sampled value.
    pub value: f64,
    /// Wall-clock time of observation.
    pub time: SystemTime,
}

impl Sample {
    /// Builds a sample stamped with the current wall-clock time.
    pub fn now(metric: Metric, tags: SampleTags, value: f64) -> Self {
        Self { metric, tags, value, time: SystemTime::now() }
    }
}

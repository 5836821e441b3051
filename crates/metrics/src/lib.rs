//! # blockmeter-metrics
//!
//! Metric identities and the shared sample pipeline for the blockmeter
//! load-testing client.
//!
//! Metric handles are declared through an explicit [`Registry`] owned by the
//! host engine and passed into whatever emits samples; there is no
//! process-wide registry. Samples flow through a [`SampleSink`] that
//! respects the run's cancellation signal: once the ambient
//! [`CancellationToken`] is cancelled, pushes become silent no-ops so
//! emitters never block or fail during host teardown.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod metric;
pub use metric::{Metric, MetricKind, Unit};

mod registry;
pub use registry::{Registry, RegistryError};

mod sample;
pub use sample::{Sample, SampleTags};

mod sink;
pub use sink::{SampleReceiver, SampleSink, channel};

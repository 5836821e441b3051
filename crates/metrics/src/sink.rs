//! The shared sample sink.

use crate::Sample;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Creates a connected [`SampleSink`]/[`SampleReceiver`] pair.
pub fn channel() -> (SampleSink, SampleReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SampleSink { tx }, SampleReceiver { rx })
}

/// The write half of the sample pipeline.
///
/// Clones share the same underlying channel, and concurrent pushers need no
/// coordination.
#[derive(Debug, Clone)]
pub struct SampleSink {
    tx: mpsc::UnboundedSender<Vec<Sample>>,
}

impl SampleSink {
    /// Pushes a batch of samples unless the execution context has ended.
    ///
    /// Once `context` is cancelled this is a silent no-op: the host is
    /// tearing down and late samples are discarded without error. Never
    /// blocks the caller. A sink whose receiver is gone also discards
    /// silently.
    pub fn push_if_active(&self, context: &CancellationToken, samples: Vec<Sample>) {
        if context.is_cancelled() {
            trace!(
                target: "sample_sink",
                dropped = samples.len(),
                "Execution context ended, discarding samples"
            );
            return;
        }

        if self.tx.send(samples).is_err() {
            trace!(target: "sample_sink", "Sample receiver dropped, discarding samples");
        }
    }
}

/// The read half of the sample pipeline, owned by the host engine.
#[derive(Debug)]
pub struct SampleReceiver {
    rx: mpsc::UnboundedReceiver<Vec<Sample>>,
}

impl SampleReceiver {
    /// Receives the next batch, or `None` once every sink clone is dropped.
    pub async fn recv(&mut self) -> Option<Vec<Sample>> {
        self.rx.recv().await
    }

    /// Non-blocking receive for drain loops.
    pub fn try_recv(&mut self) -> Option<Vec<Sample>> {
        self.rx.try_recv().ok()
    }
}

//! The head-subscription metering loop.

use crate::{ChainMetrics, EXTRINSICS_TAG};
use blockmeter_metrics::{Sample, SampleSink, SampleTags};
use blockmeter_provider::{ChainProvider, Header, ProviderError};
use futures::StreamExt;
use std::sync::Arc;
use thiserror::Error;
use tokio::select;
use tokio_util::sync::CancellationToken;

/// Errors that terminate a [`HeadSubscriber`] run.
#[derive(Debug, Error)]
pub enum SubscriberError {
    /// Opening the head subscription failed; the loop never started.
    #[error("failed to open head subscription: {0}")]
    Subscribe(#[source] ProviderError),

    /// The subscription stream itself produced a fault.
    #[error("head stream fault: {0}")]
    Stream(#[source] ProviderError),

    /// Resolving a received header into a full block failed.
    #[error("failed to resolve block {number}: {source}")]
    Resolve {
        /// Number of the header whose resolution failed.
        number: u64,
        /// The underlying provider fault.
        #[source]
        source: ProviderError,
    },
}

/// Continuously translates a node's head stream into block samples.
///
/// One subscriber owns at most one live subscription; the subscription is
/// released whichever way the loop exits. The loop runs until the upstream
/// stream closes, the execution context is cancelled, or a fault occurs.
/// Resolution faults are fatal by policy: no retry, the fault propagates.
#[derive(Debug)]
pub struct HeadSubscriber<P> {
    /// The transport the loop resolves heads through.
    provider: Arc<P>,
    /// Declared metric handles.
    metrics: ChainMetrics,
    /// Destination for emitted samples.
    sink: SampleSink,
    /// The run's ambient execution context.
    cancellation: CancellationToken,
}

impl<P> HeadSubscriber<P>
where
    P: ChainProvider,
{
    /// Creates a subscriber over an established provider.
    pub const fn new(
        provider: Arc<P>,
        metrics: ChainMetrics,
        sink: SampleSink,
        cancellation: CancellationToken,
    ) -> Self {
        Self { provider, metrics, sink, cancellation }
    }

    /// Runs the metering loop to completion.
    ///
    /// Emits one sample per received header on the block counter, tagged
    /// with the block's extrinsic count and valued at its number. The
    /// header receive is raced against the cancellation signal, so shutdown
    /// never waits on the next header; pushes after cancellation are silent
    /// no-ops either way.
    pub async fn run(self) -> Result<(), SubscriberError> {
        let mut heads =
            self.provider.subscribe_heads().await.map_err(SubscriberError::Subscribe)?;

        info!(target: "head_subscriber", "Started head subscription");

        loop {
            select! {
                _ = self.cancellation.cancelled() => {
                    info!(target: "head_subscriber", "Execution context ended, exiting");
                    return Ok(());
                }
                head = heads.next() => {
                    let Some(head) = head else {
                        info!(target: "head_subscriber", "Head stream closed upstream, exiting");
                        return Ok(());
                    };

                    let head = head.map_err(|e| {
                        warn!(target: "head_subscriber", error = %e, "Head stream fault, terminating");
                        SubscriberError::Stream(e)
                    })?;

                    if let Err(e) = self.observe_head(&head).await {
                        warn!(target: "head_subscriber", error = %e, "Terminating on resolution fault");
                        return Err(e);
                    }
                }
            }
        }
    }

    /// Resolves one head into a full block and pushes its sample.
    async fn observe_head(&self, head: &Header) -> Result<(), SubscriberError> {
        let number = head.number;
        let hash = self
            .provider
            .block_hash_by_number(number)
            .await
            .map_err(|source| SubscriberError::Resolve { number, source })?;
        let block = self
            .provider
            .block_by_hash(hash)
            .await
            .map_err(|source| SubscriberError::Resolve { number, source })?;

        debug!(
            target: "head_subscriber",
            number,
            extrinsics = block.extrinsic_count(),
            "Observed new head"
        );

        let mut tags = SampleTags::new();
        tags.insert(EXTRINSICS_TAG.to_string(), block.extrinsic_count().to_string());
        let sample = Sample::now(self.metrics.block.clone(), tags, number as f64);
        self.sink.push_if_active(&self.cancellation, vec![sample]);

        Ok(())
    }
}

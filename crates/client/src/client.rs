//! The per-connection client facade.

use crate::{
    CALL_TAG, ChainMetrics, ClientOptions, HeadSubscriber, OptionsError, SubscriberError,
};
use alloy_primitives::B256;
use blockmeter_metrics::{Registry, RegistryError, Sample, SampleSink, SampleTags};
use blockmeter_provider::{ChainProvider, OnlineChainProvider, ProviderError, ProviderResult};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const LATEST_HASH_CALL: &str = "chain_getBlockHash";

/// Errors produced while constructing a [`Client`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The options object was malformed.
    #[error(transparent)]
    Options(#[from] OptionsError),

    /// Declaring the client's metric set failed.
    #[error("failed to declare client metrics: {0}")]
    Registry(#[from] RegistryError),

    /// Dialing the endpoint failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// One logical connection to a chain node, exposed to the host scripting
/// layer.
///
/// Owns the provider, the metric set (declared once at construction), and
/// the shared sample sink. Synchronous queries run on the caller's flow;
/// head subscriptions are spawned as independent tasks.
#[derive(Debug)]
pub struct Client<P> {
    provider: Arc<P>,
    metrics: ChainMetrics,
    sink: SampleSink,
    cancellation: CancellationToken,
}

impl Client<OnlineChainProvider> {
    /// Builds a client from the host's raw options object.
    ///
    /// Options decode strictly (an unrecognized key is a construction
    /// fault), the default endpoint is applied, the node is dialed, and the
    /// metric set is declared on `registry`. Any fault here is fatal to
    /// this call only.
    pub async fn connect(
        options: serde_json::Value,
        registry: &Registry,
        sink: SampleSink,
        cancellation: CancellationToken,
    ) -> Result<Self, ClientError> {
        let options = ClientOptions::from_value(options)?;
        let metrics = ChainMetrics::register(registry)?;
        let provider = OnlineChainProvider::connect(options.endpoint()).await?;
        info!(target: "client", endpoint = %provider.endpoint(), "Connected chain client");
        Ok(Self::new(Arc::new(provider), metrics, sink, cancellation))
    }
}

impl<P> Client<P>
where
    P: ChainProvider + 'static,
{
    /// Assembles a client over an established provider.
    pub const fn new(
        provider: Arc<P>,
        metrics: ChainMetrics,
        sink: SampleSink,
        cancellation: CancellationToken,
    ) -> Self {
        Self { provider, metrics, sink, cancellation }
    }

    /// Hash of the chain's current best block.
    ///
    /// Blocks the caller's flow for one round trip and reports the trip's
    /// duration on the request-latency trend. A transport fault propagates
    /// unchanged.
    pub async fn latest_block_hash(&self) -> ProviderResult<B256> {
        let started = Instant::now();
        let result = self.provider.latest_block_hash().await;
        self.report_request_duration(LATEST_HASH_CALL, started.elapsed());
        result
    }

    /// Spawns one independent head-subscription metering task.
    ///
    /// Returns immediately with the task's handle so the owner can join or
    /// abort it. Each call opens its own subscription; calls are not
    /// deduplicated.
    pub fn start_head_subscription(&self) -> JoinHandle<Result<(), SubscriberError>> {
        let subscriber = HeadSubscriber::new(
            Arc::clone(&self.provider),
            self.metrics.clone(),
            self.sink.clone(),
            self.cancellation.clone(),
        );
        tokio::spawn(subscriber.run())
    }

    /// Pushes one request-duration sample tagged with the RPC method.
    fn report_request_duration(&self, call: &str, elapsed: Duration) {
        let mut tags = SampleTags::new();
        tags.insert(CALL_TAG.to_string(), call.to_string());
        let sample = Sample::now(
            self.metrics.request_duration.clone(),
            tags,
            elapsed.as_secs_f64() * 1_000.0,
        );
        self.sink.push_if_active(&self.cancellation, vec![sample]);
    }
}

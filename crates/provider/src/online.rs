//! Online provider over a persistent WebSocket JSON-RPC connection.

use crate::{
    ChainProvider, HeadSubscription, Header, ProviderError, ProviderResult, SignedBlock,
};
use alloy_primitives::B256;
use async_trait::async_trait;
use futures::StreamExt;
use jsonrpsee::{
    core::client::{ClientT, Subscription, SubscriptionClientT},
    rpc_params,
    ws_client::{WsClient, WsClientBuilder},
};
use std::sync::Arc;
use url::Url;

const GET_BLOCK_HASH: &str = "chain_getBlockHash";
const GET_BLOCK: &str = "chain_getBlock";
const SUBSCRIBE_NEW_HEADS: &str = "chain_subscribeNewHeads";
const UNSUBSCRIBE_NEW_HEADS: &str = "chain_unsubscribeNewHeads";

/// A [`ChainProvider`] backed by one persistent WebSocket connection.
///
/// The same connection serves synchronous queries and head subscriptions.
/// No timeouts or retries are applied: a stalled node stalls the caller.
#[derive(Debug, Clone)]
pub struct OnlineChainProvider {
    client: Arc<WsClient>,
    endpoint: Url,
}

impl OnlineChainProvider {
    /// Dials `endpoint` and returns a connected provider.
    pub async fn connect(endpoint: &str) -> ProviderResult<Self> {
        let endpoint = Url::parse(endpoint)?;
        debug!(target: "chain_provider", %endpoint, "Dialing chain node");
        let client = WsClientBuilder::default().build(endpoint.as_str()).await?;
        Ok(Self { client: Arc::new(client), endpoint })
    }

    /// The endpoint this provider is connected to.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChainProvider for OnlineChainProvider {
    async fn latest_block_hash(&self) -> ProviderResult<B256> {
        // With no number argument the node answers with its best hash.
        let hash: Option<B256> = self.client.request(GET_BLOCK_HASH, rpc_params![]).await?;
        hash.ok_or(ProviderError::MissingLatestHash)
    }

    async fn block_hash_by_number(&self, number: u64) -> ProviderResult<B256> {
        let hash: Option<B256> = self.client.request(GET_BLOCK_HASH, rpc_params![number]).await?;
        hash.ok_or(ProviderError::UnknownNumber(number))
    }

    async fn block_by_hash(&self, hash: B256) -> ProviderResult<SignedBlock> {
        let block: Option<SignedBlock> = self.client.request(GET_BLOCK, rpc_params![hash]).await?;
        block.ok_or(ProviderError::UnknownHash(hash))
    }

    async fn subscribe_heads(&self) -> ProviderResult<HeadSubscription> {
        let subscription: Subscription<Header> = self
            .client
            .subscribe(SUBSCRIBE_NEW_HEADS, rpc_params![], UNSUBSCRIBE_NEW_HEADS)
            .await?;
        debug!(target: "chain_provider", endpoint = %self.endpoint, "Opened new-heads subscription");

        // Dropping a jsonrpsee subscription sends the unsubscribe call, so
        // the stream's own drop is the release.
        Ok(HeadSubscription::from_stream(
            subscription.map(|notification| notification.map_err(ProviderError::from)),
        ))
    }
}

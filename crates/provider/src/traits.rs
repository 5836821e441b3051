//! The chain provider seam.

use crate::{HeadSubscription, ProviderError, SignedBlock};
use alloy_primitives::B256;
use async_trait::async_trait;
use std::fmt::Debug;

/// Convenience alias for provider results.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Read access to a chain node's block API.
///
/// Synchronous round trips block only the calling task. The subscription is
/// a long-lived resource with its own lifecycle; see [`HeadSubscription`].
#[async_trait]
pub trait ChainProvider: Debug + Send + Sync {
    /// Hash of the node's current best block.
    async fn latest_block_hash(&self) -> ProviderResult<B256>;

    /// Hash of the canonical block at `number`.
    async fn block_hash_by_number(&self, number: u64) -> ProviderResult<B256>;

    /// The full block with the given hash.
    async fn block_by_hash(&self, hash: B256) -> ProviderResult<SignedBlock>;

    /// Opens a subscription to new block headers.
    ///
    /// Dropping the returned handle releases the upstream resource. Holders
    /// keep at most one subscription per consumer.
    async fn subscribe_heads(&self) -> ProviderResult<HeadSubscription>;
}

//! Provider error type.

use alloy_primitives::B256;
use thiserror::Error;

/// Errors surfaced by a [`ChainProvider`].
///
/// Transport faults pass through unchanged; nothing here retries.
///
/// [`ChainProvider`]: crate::ChainProvider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The endpoint string could not be parsed.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The RPC transport failed (dial, request, or subscription channel).
    #[error("rpc transport error: {0}")]
    Transport(#[from] jsonrpsee::core::ClientError),

    /// A subscription notification could not be decoded.
    #[error("malformed header notification: {0}")]
    Decode(#[from] serde_json::Error),

    /// The node answered with no hash for the latest block.
    #[error("node returned no hash for the latest block")]
    MissingLatestHash,

    /// The node knows no canonical block at the requested number.
    #[error("no block hash known for number {0}")]
    UnknownNumber(u64),

    /// The node knows no block with the requested hash.
    #[error("no block known for hash {0}")]
    UnknownHash(B256),
}

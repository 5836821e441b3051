//! Wire types for the chain's block API.

use alloy_primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

/// A block header delivered by the new-heads subscription.
///
/// Numbers are hex quantities on the wire. Across notifications they are
/// monotonically non-decreasing, but the node may skip numbers when it
/// coalesces announcements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// The block number.
    #[serde(with = "alloy_serde::quantity")]
    pub number: u64,
    /// Hash of the parent header.
    pub parent_hash: B256,
    /// State trie root after this block.
    pub state_root: B256,
    /// Trie root over the block's extrinsics.
    pub extrinsics_root: B256,
}

/// A full block: header plus its ordered extrinsics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The block's header.
    pub header: Header,
    /// The units of work included in the block, as opaque encoded bytes.
    pub extrinsics: Vec<Bytes>,
}

/// The `chain_getBlock` response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedBlock {
    /// The resolved block.
    pub block: Block,
}

impl SignedBlock {
    /// The block number.
    pub fn number(&self) -> u64 {
        self.block.header.number
    }

    /// Number of extrinsics included in the block.
    pub fn extrinsic_count(&self) -> usize {
        self.block.extrinsics.len()
    }
}

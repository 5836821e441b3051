//! Test doubles shared by the crate's unit tests.

use alloy_primitives::{B256, Bytes};
use async_trait::async_trait;
use blockmeter_provider::{
    Block, ChainProvider, HeadSubscription, Header, ProviderError, ProviderResult, SignedBlock,
};
use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// A scripted chain the fake provider answers from.
#[derive(Debug, Default)]
pub(crate) struct FakeChain {
    hash_by_number: HashMap<u64, B256>,
    block_by_hash: HashMap<B256, SignedBlock>,
    hash_faults: HashSet<u64>,
    block_faults: HashSet<B256>,
    latest: Option<B256>,
}

impl FakeChain {
    /// Registers a resolvable block carrying `extrinsic_count` opaque
    /// extrinsics. The most recently added block becomes the latest.
    pub(crate) fn with_block(mut self, number: u64, hash: B256, extrinsic_count: usize) -> Self {
        let block = SignedBlock {
            block: Block {
                header: Header {
                    number,
                    parent_hash: B256::ZERO,
                    state_root: B256::ZERO,
                    extrinsics_root: B256::ZERO,
                },
                extrinsics: vec![Bytes::from_static(&[0x04, 0x00]); extrinsic_count],
            },
        };
        self.hash_by_number.insert(number, hash);
        self.block_by_hash.insert(hash, block);
        self.latest = Some(hash);
        self
    }

    /// Makes number-to-hash resolution fail for `number`.
    pub(crate) fn with_hash_fault(mut self, number: u64) -> Self {
        self.hash_faults.insert(number);
        self
    }

    /// Makes hash-to-block resolution fail for `number`'s hash.
    pub(crate) fn with_block_fault(mut self, number: u64, hash: B256) -> Self {
        self.hash_by_number.insert(number, hash);
        self.block_faults.insert(hash);
        self
    }
}

/// A [`ChainProvider`] double driven by channels of scripted headers.
///
/// Each `subscribe_heads` call consumes one scripted channel; the release
/// hook of every handed-out subscription counts into
/// [`Self::unsubscribe_count`].
#[derive(Debug)]
pub(crate) struct FakeProvider {
    chain: FakeChain,
    subscriptions: Mutex<VecDeque<mpsc::Receiver<ProviderResult<Header>>>>,
    unsubscribes: Arc<AtomicUsize>,
}

impl FakeProvider {
    /// Builds a provider supporting exactly one subscription, plus the
    /// sending half used to script its headers.
    pub(crate) fn new(chain: FakeChain) -> (Arc<Self>, mpsc::Sender<ProviderResult<Header>>) {
        let (provider, mut senders) = Self::with_subscriptions(chain, 1);
        (provider, senders.pop().unwrap())
    }

    /// Builds a provider supporting `count` subscriptions.
    pub(crate) fn with_subscriptions(
        chain: FakeChain,
        count: usize,
    ) -> (Arc<Self>, Vec<mpsc::Sender<ProviderResult<Header>>>) {
        let mut senders = Vec::with_capacity(count);
        let mut receivers = VecDeque::with_capacity(count);
        for _ in 0..count {
            let (tx, rx) = mpsc::channel(32);
            senders.push(tx);
            receivers.push_back(rx);
        }

        let provider = Arc::new(Self {
            chain,
            subscriptions: Mutex::new(receivers),
            unsubscribes: Arc::new(AtomicUsize::new(0)),
        });
        (provider, senders)
    }

    /// How many subscription release hooks have run.
    pub(crate) fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainProvider for FakeProvider {
    async fn latest_block_hash(&self) -> ProviderResult<B256> {
        self.chain.latest.ok_or(ProviderError::MissingLatestHash)
    }

    async fn block_hash_by_number(&self, number: u64) -> ProviderResult<B256> {
        if self.chain.hash_faults.contains(&number) {
            return Err(ProviderError::UnknownNumber(number));
        }
        self.chain.hash_by_number.get(&number).copied().ok_or(ProviderError::UnknownNumber(number))
    }

    async fn block_by_hash(&self, hash: B256) -> ProviderResult<SignedBlock> {
        if self.chain.block_faults.contains(&hash) {
            return Err(ProviderError::UnknownHash(hash));
        }
        self.chain.block_by_hash.get(&hash).cloned().ok_or(ProviderError::UnknownHash(hash))
    }

    async fn subscribe_heads(&self) -> ProviderResult<HeadSubscription> {
        let rx = self.subscriptions.lock().unwrap().pop_front().ok_or_else(|| {
            ProviderError::Transport(jsonrpsee::core::ClientError::Custom(
                "no subscription scripted".to_string(),
            ))
        })?;

        let unsubscribes = Arc::clone(&self.unsubscribes);
        Ok(HeadSubscription::new(ReceiverStream::new(rx), move || {
            unsubscribes.fetch_add(1, Ordering::SeqCst);
        }))
    }
}

/// A header as the subscription would deliver it.
pub(crate) fn header(number: u64) -> Header {
    Header {
        number,
        parent_hash: B256::ZERO,
        state_root: B256::ZERO,
        extrinsics_root: B256::ZERO,
    }
}

/// Deterministic per-number hash for scripting fakes.
pub(crate) fn hash(number: u64) -> B256 {
    B256::with_last_byte(number as u8)
}

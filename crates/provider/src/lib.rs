//! # blockmeter-provider
//!
//! The RPC transport for the blockmeter load-testing client: wire types for
//! the Substrate chain API, the [`ChainProvider`] seam the rest of the
//! workspace programs against, and an online implementation over a
//! persistent WebSocket JSON-RPC connection.
//!
//! Transport faults propagate unchanged — nothing in this crate retries,
//! wraps beyond identity, or applies timeouts. A [`HeadSubscription`] is the
//! live streaming resource; dropping it releases the upstream subscription
//! on every exit path.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod types;
pub use types::{Block, Header, SignedBlock};

mod error;
pub use error::ProviderError;

mod traits;
pub use traits::{ChainProvider, ProviderResult};

mod subscription;
pub use subscription::HeadSubscription;

mod online;
pub use online::OnlineChainProvider;

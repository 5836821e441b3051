//! # blockmeter-client
//!
//! The load-testing client for Substrate-style chains: a facade the host
//! scripting layer constructs per connection, and the head-subscription
//! metering loop behind it.
//!
//! ## Data flow
//!
//! The [`Client`] dials a node through a
//! [`ChainProvider`](blockmeter_provider::ChainProvider) and declares its
//! metric set on the host's registry exactly once, at construction. A
//! spawned [`HeadSubscriber`] then turns every new head into one sample on
//! the block counter: resolve the head's number to a hash, the hash to a
//! full block, tag the sample with the block's extrinsic count, and push it
//! through the shared sink. Pushes respect the run's cancellation signal;
//! resolution faults terminate the loop loudly.
//!
//! Synchronous queries ([`Client::latest_block_hash`]) run on the caller's
//! own flow and report their round-trip latency on the request-duration
//! trend.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod options;
pub use options::{ClientOptions, DEFAULT_RPC_URL, OptionsError};

mod metrics;
pub use metrics::{
    BLOCK, CALL_TAG, ChainMetrics, EXTRINSICS_TAG, REQUEST_DURATION, TIME_TO_MINE, TPS,
};

mod subscriber;
pub use subscriber::{HeadSubscriber, SubscriberError};

mod client;
pub use client::{Client, ClientError};

#[cfg(test)]
mod test_utils;

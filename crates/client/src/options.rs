//! Client construction options.

use serde::Deserialize;
use thiserror::Error;

/// Endpoint used when options leave `url` empty.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Errors produced while decoding client options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options object has the wrong shape or carries a field this
    /// client does not recognize.
    #[error("invalid options; reason: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Configuration accepted by [`Client::connect`].
///
/// Decoding is strict: unknown keys fail construction instead of being
/// silently ignored, so option typos surface at the call site. Every field
/// defaults when absent.
///
/// [`Client::connect`]: crate::Client::connect
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ClientOptions {
    /// RPC endpoint of the target node. Empty means [`DEFAULT_RPC_URL`].
    pub url: String,
    /// Seed phrase for submission flows. Unused by the metering core.
    pub mnemonic: String,
    /// Raw key material for submission flows. Unused by the metering core.
    pub private_key: String,
}

impl ClientOptions {
    /// Decodes options from the host's raw JSON object, strictly.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The endpoint to dial, with the default applied.
    pub fn endpoint(&self) -> &str {
        if self.url.is_empty() { DEFAULT_RPC_URL } else { &self.url }
    }
}

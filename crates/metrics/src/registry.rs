//! Metric declaration.

use crate::{Metric, MetricKind, Unit};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};
use thiserror::Error;

/// Metric names are capped to keep downstream storage keys bounded.
const MAX_NAME_LEN: usize = 128;

/// Errors produced while declaring metrics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is empty, too long, or contains characters outside
    /// `[A-Za-z0-9_]` (or does not start with a letter).
    #[error("invalid metric name: {0:?}")]
    InvalidName(String),

    /// A metric with the same name was already declared.
    #[error("metric {0:?} is already registered")]
    AlreadyRegistered(String),
}

/// A set of declared metric identities.
///
/// Constructed once by the host and passed explicitly to whatever declares
/// metrics. Clones share the same underlying set of names, so a name can be
/// declared at most once per registry regardless of which clone sees it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    inner: Arc<Mutex<HashMap<String, Metric>>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new metric and returns its handle.
    ///
    /// Fails if the name is malformed or already taken.
    pub fn register(
        &self,
        name: &str,
        kind: MetricKind,
        unit: Unit,
    ) -> Result<Metric, RegistryError> {
        if !valid_name(name) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }

        let mut metrics = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if metrics.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }

        let metric = Metric::new(name.to_string(), kind, unit);
        metrics.insert(name.to_string(), metric.clone());
        Ok(metric)
    }

    /// Returns the handle for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<Metric> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).get(name).cloned()
    }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_and_returns_handle() {
        let registry = Registry::new();
        let metric = registry.register("chain_block", MetricKind::Counter, Unit::Default).unwrap();
        assert_eq!(metric.name(), "chain_block");
        assert_eq!(metric.kind(), MetricKind::Counter);
        assert_eq!(registry.get("chain_block"), Some(metric));
    }

    #[test]
    fn rejects_duplicate_names() {
        let registry = Registry::new();
        registry.register("dup", MetricKind::Gauge, Unit::Default).unwrap();
        let err = registry.register("dup", MetricKind::Gauge, Unit::Default).unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered("dup".to_string()));
    }

    #[test]
    fn duplicate_check_is_shared_across_clones() {
        let registry = Registry::new();
        let clone = registry.clone();
        registry.register("shared", MetricKind::Trend, Unit::Milliseconds).unwrap();
        assert!(clone.register("shared", MetricKind::Trend, Unit::Milliseconds).is_err());
    }

    #[test]
    fn rejects_malformed_names() {
        let registry = Registry::new();
        for name in ["", "1leading_digit", "has space", "has-dash", &"x".repeat(129)] {
            let err = registry.register(name, MetricKind::Counter, Unit::Default).unwrap_err();
            assert_eq!(err, RegistryError::InvalidName(name.to_string()), "name: {name:?}");
        }
    }

    #[test]
    fn handles_compare_by_identity() {
        let registry = Registry::new();
        let a = registry.register("a", MetricKind::Counter, Unit::Default).unwrap();
        let b = registry.register("b", MetricKind::Counter, Unit::Default).unwrap();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}

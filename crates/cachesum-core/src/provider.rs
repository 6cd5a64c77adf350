//! Algorithm provider table.
//!
//! Maps each `DigestAlgorithm` to the pure function computing its digest.
//! The table is built once at startup and never mutated afterwards, so it is
//! safe for unsynchronized concurrent reads. Adding an algorithm means adding
//! an enum member and a table entry.

use std::collections::HashMap;

use cachesum_types::digest::DigestAlgorithm;

/// A digest provider: a deterministic, pure, total function from an input
/// string to its lowercase hex digest.
pub type ProviderFn = fn(&str) -> String;

/// Immutable algorithm-to-provider mapping.
#[derive(Debug, Clone, Default)]
pub struct ProviderTable {
    providers: HashMap<DigestAlgorithm, ProviderFn>,
}

impl ProviderTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider for an algorithm (builder style, used at startup).
    pub fn with(mut self, algorithm: DigestAlgorithm, provider: ProviderFn) -> Self {
        self.providers.insert(algorithm, provider);
        self
    }

    /// Look up the provider for an algorithm.
    pub fn get(&self, algorithm: DigestAlgorithm) -> Option<ProviderFn> {
        self.providers.get(&algorithm).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_provider(input: &str) -> String {
        format!("stub-{input}")
    }

    #[test]
    fn test_registered_provider_is_returned() {
        let table = ProviderTable::new().with(DigestAlgorithm::Md5, stub_provider);
        let provider = table.get(DigestAlgorithm::Md5).unwrap();
        assert_eq!(provider("x"), "stub-x");
    }

    #[test]
    fn test_unregistered_provider_is_none() {
        let table = ProviderTable::new().with(DigestAlgorithm::Md5, stub_provider);
        assert!(table.get(DigestAlgorithm::Sha256).is_none());
        assert!(ProviderTable::new().get(DigestAlgorithm::Md5).is_none());
    }
}

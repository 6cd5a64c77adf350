//! Cache store trait.
//!
//! Defines the expiring key-value contract the orchestrator requires from
//! whatever backing store is wired in. Implementations live in cachesum-infra.

use std::time::Duration;

use cachesum_types::digest::DigestAlgorithm;
use cachesum_types::error::RepositoryError;

/// Trait for the expiring key-value store backing the digest cache.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// No transactional or compare-and-set semantics: `set` is an upsert and
/// concurrent writers may race (last write wins).
pub trait CacheStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist or has expired.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Set a value for a key (upsert) with a time-to-live.
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

/// Build the cache key for an (algorithm, input) pair.
///
/// Layout is `{algorithm}:input:{raw-input}`. It must stay bit-for-bit stable
/// for compatibility with pre-existing cache contents, and the algorithm
/// prefix keeps identical inputs under different algorithms from colliding.
pub fn cache_key(algorithm: DigestAlgorithm, input: &str) -> String {
    format!("{}:input:{}", algorithm.as_str(), input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_layout() {
        assert_eq!(cache_key(DigestAlgorithm::Md5, "test"), "md5:input:test");
        assert_eq!(
            cache_key(DigestAlgorithm::Sha256, "test"),
            "sha256:input:test"
        );
    }

    #[test]
    fn test_cache_key_namespaced_by_algorithm() {
        let md5 = cache_key(DigestAlgorithm::Md5, "same input");
        let sha256 = cache_key(DigestAlgorithm::Sha256, "same input");
        assert_ne!(md5, sha256);
    }

    #[test]
    fn test_cache_key_preserves_raw_input() {
        // The raw input lands in the key untouched, separators and all.
        assert_eq!(
            cache_key(DigestAlgorithm::Md5, "a:b c\nd"),
            "md5:input:a:b c\nd"
        );
    }
}

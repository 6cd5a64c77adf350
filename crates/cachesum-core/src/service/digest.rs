//! Digest service: cache-aside lookup/compute/store orchestration.
//!
//! The service checks the backing store first and only computes a digest on a
//! miss, writing the fresh value back with the configured TTL. It holds no
//! mutable state between requests -- just the store handle and the immutable
//! provider table.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use cachesum_types::digest::{Digest, DigestAlgorithm};
use cachesum_types::error::{DigestError, RepositoryError};

use crate::provider::ProviderTable;
use crate::storage::{CacheStore, cache_key};

/// Errors from the digest service.
#[derive(Debug, thiserror::Error)]
pub enum DigestServiceError {
    /// The provider table has no entry for an otherwise-valid algorithm.
    /// A wiring defect, distinct from value-level `UnsupportedAlgorithm`.
    #[error("no provider registered for algorithm '{0}'")]
    ProviderNotRegistered(DigestAlgorithm),

    /// Entity validation failed on the compute path.
    #[error(transparent)]
    Validation(#[from] DigestError),

    /// A cache hit carried data that failed entity validation.
    #[error("corrupted cache entry for key '{key}': {source}")]
    CorruptEntry { key: String, source: DigestError },

    /// Persisting the computed digest failed. The computed value is withheld
    /// so the response never disagrees with what the cache claims.
    #[error("save digest: {0}")]
    Save(RepositoryError),

    /// The caller's cancellation signal fired while a store call was in flight.
    #[error("request cancelled")]
    Cancelled,
}

/// Cache-aside digest service.
pub struct DigestService<S: CacheStore> {
    store: S,
    providers: ProviderTable,
    ttl: Duration,
}

impl<S: CacheStore> DigestService<S> {
    /// Create a new digest service over a store handle, a provider table and
    /// the uniform TTL applied to all cache writes.
    pub fn new(store: S, providers: ProviderTable, ttl: Duration) -> Self {
        Self {
            store,
            providers,
            ttl,
        }
    }

    /// Return the digest of `input` under `algorithm`, computing it on a
    /// cache miss.
    ///
    /// Store calls are raced against `cancel`; if it fires, the request fails
    /// promptly with [`DigestServiceError::Cancelled`]. A read failure is
    /// folded into a miss and recomputed; a write failure is fatal to the
    /// request. No retries happen at this layer.
    pub async fn compute_or_fetch(
        &self,
        input: &str,
        algorithm: DigestAlgorithm,
        cancel: &CancellationToken,
    ) -> Result<Digest, DigestServiceError> {
        if input.is_empty() {
            return Err(DigestError::EmptyInput.into());
        }

        let key = cache_key(algorithm, input);

        match self.bounded(cancel, self.store.get(&key)).await? {
            Ok(Some(stored)) => {
                tracing::debug!(%key, "cache hit");
                return Digest::new(input, stored, algorithm)
                    .map_err(|source| DigestServiceError::CorruptEntry { key, source });
            }
            Ok(None) => {
                tracing::debug!(%key, "cache miss");
            }
            Err(err) => {
                // Treated like a plain miss: recompute and overwrite below.
                tracing::warn!(%key, error = %err, "cache read failed, falling back to compute");
            }
        }

        let provider = self
            .providers
            .get(algorithm)
            .ok_or(DigestServiceError::ProviderNotRegistered(algorithm))?;

        let digest = Digest::new(input, provider(input), algorithm)?;

        self.bounded(cancel, self.store.set(&key, digest.digest(), self.ttl))
            .await?
            .map_err(DigestServiceError::Save)?;

        Ok(digest)
    }

    /// Race a store future against the cancellation token.
    async fn bounded<T>(
        &self,
        cancel: &CancellationToken,
        fut: impl Future<Output = T>,
    ) -> Result<T, DigestServiceError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DigestServiceError::Cancelled),
            out = fut => Ok(out),
        }
    }
}

use thiserror::Error;

/// Errors from digest entity validation.
///
/// Raised at construction time, on both the fresh-compute path and the
/// cache-hit reconstruction path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("input string cannot be empty")]
    EmptyInput,

    #[error("digest string cannot be empty")]
    EmptyDigest,

    #[error("unsupported algorithm: '{0}'")]
    UnsupportedAlgorithm(String),
}

/// Errors from cache store operations (used by trait definitions in cachesum-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entry not found")]
    NotFound,
}

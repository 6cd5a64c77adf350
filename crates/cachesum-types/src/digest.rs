//! Digest entity and algorithm enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// Supported digest algorithms.
///
/// A closed set: each member maps to exactly one canonical lowercase
/// identifier (used as the cache key namespace) and one provider function
/// registered at startup. Unknown identifiers are rejected at the string
/// boundary by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Canonical lowercase identifier, as used in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            other => Err(DigestError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// A validated (input, digest, algorithm) triple.
///
/// Immutable once constructed; equality is structural. Built fresh after a
/// provider computation or reconstructed from a cache hit -- both paths go
/// through the same validation, so a corrupted cache entry is rejected
/// exactly like a bad fresh computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    input: String,
    digest: String,
    algorithm: DigestAlgorithm,
}

impl Digest {
    /// Validate and construct a digest entity.
    pub fn new(
        input: impl Into<String>,
        digest: impl Into<String>,
        algorithm: DigestAlgorithm,
    ) -> Result<Self, DigestError> {
        let input = input.into();
        let digest = digest.into();

        if input.is_empty() {
            return Err(DigestError::EmptyInput);
        }
        if digest.is_empty() {
            return Err(DigestError::EmptyDigest);
        }

        Ok(Self {
            input,
            digest,
            algorithm,
        })
    }

    /// The original input string.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The lowercase hex digest string.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// The algorithm that produced the digest.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

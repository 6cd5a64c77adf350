//! SHA-256 digest provider.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `input`.
///
/// The result is always 64 lowercase hex characters.
pub fn digest_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    format!("{:x}", digest)
}

//! MD5 digest provider.

use md5::{Digest, Md5};

/// Compute the MD5 digest of `input`.
///
/// The result is always 32 lowercase hex characters.
pub fn digest_hex(input: &str) -> String {
    let digest = Md5::digest(input.as_bytes());
    format!("{:x}", digest)
}

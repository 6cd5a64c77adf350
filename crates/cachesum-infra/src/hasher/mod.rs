//! Digest provider functions.
//!
//! Pure `fn(&str) -> String` providers over the RustCrypto hashes, plus the
//! default table wiring them to the algorithm enumeration.

pub mod md5;
pub mod sha256;

use cachesum_core::provider::ProviderTable;
use cachesum_types::digest::DigestAlgorithm;

/// Build the provider table with every supported algorithm registered.
///
/// Called once at startup; the table is immutable afterwards.
pub fn default_provider_table() -> ProviderTable {
    ProviderTable::new()
        .with(DigestAlgorithm::Md5, md5::digest_hex)
        .with(DigestAlgorithm::Sha256, sha256::digest_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_every_algorithm() {
        let table = default_provider_table();
        assert!(table.get(DigestAlgorithm::Md5).is_some());
        assert!(table.get(DigestAlgorithm::Sha256).is_some());
    }
}

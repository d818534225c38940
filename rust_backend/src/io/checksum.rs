//! Checksum calculation for dataset fingerprinting.

use sha2::{Digest, Sha256};

use crate::core::LaunchRecord;

/// Calculate SHA-256 checksum of raw dataset content.
///
/// # Arguments
/// * `content` - Bytes of the source file
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Calculate SHA-256 checksum over parsed records, for datasets that were
/// never read from a file.
pub fn checksum_records(records: &[LaunchRecord]) -> String {
    let mut hasher = Sha256::new();
    for record in records {
        hasher.update(record.site.as_bytes());
        hasher.update([0u8]);
        hasher.update(record.payload_kg().to_le_bytes());
        hasher.update([record.outcome.as_flag()]);
        hasher.update(record.booster_version.as_bytes());
        hasher.update([b'\n']);
    }
    hex::encode(hasher.finalize())
}

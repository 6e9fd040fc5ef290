//! # Hashing Utilities
//!
//! SHA-256 over a sequence of byte slices, hex-encoded in lowercase so
//! digests compare byte-for-byte with any other implementation that
//! follows the same preimage layout.

use sha2::{Digest, Sha256};

/// Hash the concatenation of `parts` without separators and return
/// lowercase hex. Avoids building an intermediate buffer.
pub fn sha256_hex_multi(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

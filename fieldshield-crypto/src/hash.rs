//! One-way hashing.

use sha2::{Digest, Sha256};

/// SHA-256 digest of a UTF-8 value as lowercase hex.
pub fn sha256_hex(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

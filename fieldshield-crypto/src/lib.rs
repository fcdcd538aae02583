//! Crypto primitives adapter for FieldShield.
//!
//! Provides the three primitives the field pipeline needs:
//! - RSA (PKCS#1 v1.5) over hex-encoded DER key material, for field values
//! - AES-128-CBC with a fixed shared key/IV pair, for legacy parameter blobs
//! - SHA-256 one-way hashing
//!
//! plus the ciphertext heuristic used to keep encryption and decryption
//! idempotent against double-processing.
//!
//! # Key material
//!
//! Public keys arrive as hex-encoded X.509 SPKI DER, private keys as
//! hex-encoded PKCS#8 DER — the formats the key-management service stores.
//! Ciphertext produced by [`rsa::encrypt`] is hex; ciphertext produced by
//! [`SharedKeyCipher::encrypt`] is url-safe base64 without padding.

mod cipher;
mod detect;
mod error;
mod hash;
pub mod rsa;

pub use self::cipher::SharedKeyCipher;
pub use self::detect::{MIN_CIPHERTEXT_LEN, looks_encrypted, looks_plain};
pub use self::error::{CryptoError, CryptoResult};
pub use self::hash::sha256_hex;

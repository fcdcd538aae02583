//! Crypto error types.
//!
//! Error messages carry operation context only — never key material and
//! never field values.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in the crypto primitives adapter.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("key material could not be parsed: {0}")]
    InvalidKey(String),

    #[error("cipher operation failed: {0}")]
    CipherFailure(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

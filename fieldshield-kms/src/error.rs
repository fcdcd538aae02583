//! Key resolution error types.

use thiserror::Error;

/// Result type for key resolution operations.
pub type KeyResult<T> = Result<T, KeyResolutionError>;

/// Errors surfaced by the key-management client and resolver.
///
/// The interceptor decides severity: fatal on the write path, best-effort
/// on the read path. Messages name scopes and statuses, never key material.
#[derive(Debug, Error)]
pub enum KeyResolutionError {
    #[error("key service unavailable: {0}")]
    Unavailable(String),

    #[error("no key material registered for {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for KeyResolutionError {
    fn from(err: reqwest::Error) -> Self {
        KeyResolutionError::Unavailable(err.to_string())
    }
}

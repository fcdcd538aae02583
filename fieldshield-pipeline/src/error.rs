//! Pipeline error types.

use fieldshield_crypto::CryptoError;
use fieldshield_kms::KeyResolutionError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors surfaced by the write path of the lifecycle interceptor.
///
/// The read path recovers locally instead of returning these: a record
/// with one unreadable field is still worth returning.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("key resolution failed: {0}")]
    KeyResolution(#[from] KeyResolutionError),
}

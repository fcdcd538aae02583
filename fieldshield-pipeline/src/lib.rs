//! The FieldShield pipeline: transparent field-level encryption plus
//! authorization-aware masking.
//!
//! Three pieces, invoked inline by whatever request thread owns the record:
//! - [`RecordCipher`]: before-write / after-read hooks the persistence
//!   layer calls; encrypts and decrypts tagged fields in place
//! - [`mask`](mod@mask): pure display-time redaction strategies for PII
//! - [`ResponseFilter`]: decides per field and per caller whether to emit
//!   the raw value, a masked rendering, or nothing at all

pub mod error;
pub mod filter;
pub mod interceptor;
pub mod mask;

pub use error::{PipelineError, PipelineResult};
pub use filter::{FieldDecision, ResponseFilter, decide};
pub use interceptor::RecordCipher;
pub use mask::mask;

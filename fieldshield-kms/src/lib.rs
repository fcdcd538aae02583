//! Key-management integration for FieldShield.
//!
//! Provides:
//! - [`KmsClient`]: HTTP client for the external key-management service,
//!   authenticated with a bearer token passed through from the caller's
//!   session
//! - [`KeyResolver`]: caching resolver over the client; concurrent misses
//!   for one scope coalesce into a single outbound request
//! - [`KeySource`]: the trait seam the lifecycle interceptor consumes, so
//!   tests and alternative deployments can swap the resolver out

pub mod client;
pub mod config;
pub mod error;
pub mod material;
pub mod resolver;

pub use client::KmsClient;
pub use config::KmsConfig;
pub use error::{KeyResolutionError, KeyResult};
pub use material::{KeyMaterial, PrivateKeyHex};
pub use resolver::{KeyResolver, KeySource};

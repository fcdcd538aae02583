//! Key-management client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the key-management client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KmsConfig {
    /// Base URL of the key-management service
    /// (e.g., "https://kms.internal/v1/keys").
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for KmsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://kms.internal/v1/keys".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl KmsConfig {
    /// Config pointed at an arbitrary endpoint, mostly for tests and local
    /// mock servers.
    pub fn for_endpoint(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

//! HTTP client for the external key-management service.
//!
//! The service holds the RSA key pairs; this client fetches them over three
//! endpoints (one POST by scope, two GETs by table name / row public key).
//! Authentication is a bearer token passed through from the caller's
//! session — the client never mints tokens of its own.

use crate::config::KmsConfig;
use crate::error::{KeyResolutionError, KeyResult};
use crate::material::{KeyMaterial, PrivateKeyHex};
use fieldshield_types::KeyScope;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Client for the key-management service.
pub struct KmsClient {
    client: Client,
    config: KmsConfig,
    /// Session bearer token, set per login and cleared on logout.
    bearer: RwLock<Option<String>>,
}

#[derive(Deserialize)]
struct KeyResponse {
    #[serde(rename = "publicKeyHex")]
    public_key_hex: Option<String>,
    #[serde(rename = "privateKeyHex")]
    private_key_hex: String,
}

impl KmsClient {
    pub fn new(config: KmsConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            config,
            bearer: RwLock::new(None),
        }
    }

    /// Sets the session token forwarded on every request.
    pub async fn set_bearer_token(&self, token: String) {
        *self.bearer.write().await = Some(token);
    }

    pub async fn clear_bearer_token(&self) {
        *self.bearer.write().await = None;
    }

    /// Fetches the shared key pair of a logical table.
    pub async fn table_key(&self, table: &str) -> KeyResult<KeyMaterial> {
        debug!(table, "fetching table key");
        let resp = self
            .get("/rsa/private-key", &[("tableName", table)], table)
            .await?;

        let body: KeyResponse = resp.json().await?;
        let public_key_hex = body.public_key_hex.ok_or_else(|| {
            KeyResolutionError::Unavailable(format!(
                "key service omitted publicKeyHex for table {table}"
            ))
        })?;

        Ok(KeyMaterial::new(
            KeyScope::table(table),
            public_key_hex,
            body.private_key_hex,
        ))
    }

    /// Fetches the key pair of a single row, looked up by its public key.
    pub async fn row_key(&self, key_public: &str) -> KeyResult<KeyMaterial> {
        debug!("fetching row key");
        let resp = self
            .get("/rsa/private-key", &[("keyPublic", key_public)], "row key")
            .await?;

        let body: KeyResponse = resp.json().await?;

        // The row's public key is its own lookup handle; the service only
        // needs to return the private half.
        Ok(KeyMaterial::new(
            KeyScope::row(key_public),
            key_public.to_string(),
            body.private_key_hex,
        ))
    }

    /// Requests a private key by explicit scope over the POST endpoint.
    pub async fn request_private_key(&self, scope: &KeyScope) -> KeyResult<PrivateKeyHex> {
        debug!(kind = scope.kind(), "requesting private key by scope");
        let url = format!("{}/rsa/private-key", self.config.base_url);
        let mut req = self.client.post(&url).json(&serde_json::json!({
            "scope": scope.kind(),
            "scopeId": scope.id(),
        }));
        if let Some(token) = self.bearer.read().await.as_deref() {
            req = req.bearer_auth(token);
        }

        let resp = check_status(req.send().await?, scope.id())?;
        let body: KeyResponse = resp.json().await?;
        Ok(PrivateKeyHex::new(body.private_key_hex))
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        subject: &str,
    ) -> KeyResult<reqwest::Response> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut req = self.client.get(&url).query(query);
        if let Some(token) = self.bearer.read().await.as_deref() {
            req = req.bearer_auth(token);
        }
        check_status(req.send().await?, subject)
    }
}

fn check_status(resp: reqwest::Response, subject: &str) -> KeyResult<reqwest::Response> {
    if resp.status() == StatusCode::NOT_FOUND {
        return Err(KeyResolutionError::NotFound(subject.to_string()));
    }
    resp.error_for_status()
        .map_err(|e| KeyResolutionError::Unavailable(e.to_string()))
}

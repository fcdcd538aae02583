//! Caching key resolver with single-flight coalescing.

use crate::client::KmsClient;
use crate::error::{KeyResolutionError, KeyResult};
use crate::material::KeyMaterial;
use fieldshield_types::KeyScope;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Source of key material, as consumed by the lifecycle interceptor.
///
/// The production implementation is [`KeyResolver`]; tests substitute
/// in-memory stubs.
pub trait KeySource: Send + Sync {
    fn resolve(&self, scope: &KeyScope) -> impl Future<Output = KeyResult<Arc<KeyMaterial>>> + Send;
}

/// Caching resolver over the key-management client.
///
/// Each scope gets one cache slot; concurrent misses for the same scope
/// await a single in-flight fetch instead of issuing a request storm. A
/// failed fetch leaves the slot empty, so the next caller retries, and a
/// cancelled waiter hands the in-flight initialization to the remaining
/// waiters rather than poisoning the slot.
pub struct KeyResolver {
    client: Arc<KmsClient>,
    cache: Mutex<HashMap<KeyScope, Arc<OnceCell<Arc<KeyMaterial>>>>>,
}

impl KeyResolver {
    pub fn new(client: Arc<KmsClient>) -> Self {
        Self {
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves the key material for a scope, fetching on first use.
    pub async fn resolve(&self, scope: &KeyScope) -> KeyResult<Arc<KeyMaterial>> {
        let slot = {
            let mut cache = self.cache.lock();
            Arc::clone(
                cache
                    .entry(scope.clone())
                    .or_insert_with(|| Arc::new(OnceCell::new())),
            )
        };

        let material = slot
            .get_or_try_init(|| async {
                debug!(kind = scope.kind(), id = scope.id(), "key cache miss");
                let material = match scope {
                    KeyScope::Table { table } => self.client.table_key(table).await?,
                    KeyScope::Row { key_public } => self.client.row_key(key_public).await?,
                };
                Ok::<_, KeyResolutionError>(Arc::new(material))
            })
            .await?;

        Ok(Arc::clone(material))
    }

    /// Drops the cached material for one scope (key rotation).
    pub fn invalidate(&self, scope: &KeyScope) -> bool {
        self.cache.lock().remove(scope).is_some()
    }

    /// Drops every cached key.
    pub fn invalidate_all(&self) {
        self.cache.lock().clear();
    }
}

impl KeySource for KeyResolver {
    async fn resolve(&self, scope: &KeyScope) -> KeyResult<Arc<KeyMaterial>> {
        KeyResolver::resolve(self, scope).await
    }
}

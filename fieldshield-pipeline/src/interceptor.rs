//! Lifecycle hooks: encrypt before write, decrypt after read.

use crate::error::PipelineResult;
use fieldshield_crypto::{looks_encrypted, looks_plain, rsa};
use fieldshield_kms::KeySource;
use fieldshield_meta::{MetaRegistry, SecureFields};
use tracing::warn;

/// In-place field cipher invoked by the persistence layer around every
/// write and read of a protected record.
///
/// The key source is injected; the metadata registry is private state.
/// Failure policy is asymmetric: an encrypt or key-resolution failure on
/// write aborts the write (a silently-unencrypted row is a security
/// defect), while failures on read leave the stored ciphertext in place so
/// one unreadable field does not take down a listing.
pub struct RecordCipher<K> {
    keys: K,
    meta: MetaRegistry,
}

impl<K: KeySource> RecordCipher<K> {
    pub fn new(keys: K) -> Self {
        Self {
            keys,
            meta: MetaRegistry::new(),
        }
    }

    /// Encrypts every eligible plaintext field in place.
    ///
    /// Fields that already look encrypted are skipped, which makes the hook
    /// idempotent when an unchanged record is written back.
    pub async fn before_write<T: SecureFields>(&self, record: &mut T) -> PipelineResult<()> {
        let meta = self.meta.scan::<T>();
        if !meta.has_crypto_fields() {
            return Ok(());
        }

        let scope = record.key_scope();
        let key = self.keys.resolve(&scope).await?;

        for field in &meta.crypto_fields {
            let value = match (field.get)(record) {
                Some(v) if !v.is_empty() => v,
                _ => continue,
            };
            if looks_encrypted(value) {
                continue;
            }
            let sealed = rsa::encrypt(&key.public_key_hex, value)?;
            (field.set)(record, Some(sealed));
        }

        Ok(())
    }

    /// Decrypts every eligible ciphertext field in place, best-effort.
    ///
    /// Plaintext fields are skipped (legacy rows written before encryption
    /// was rolled out); undecryptable fields keep their stored value.
    pub async fn after_read<T: SecureFields>(&self, record: &mut T) {
        let meta = self.meta.scan::<T>();
        if !meta.has_crypto_fields() {
            return;
        }

        let scope = record.key_scope();
        let key = match self.keys.resolve(&scope).await {
            Ok(key) => key,
            Err(err) => {
                warn!(
                    scope = scope.id(),
                    %err,
                    "key resolution failed on read, leaving fields as stored"
                );
                return;
            }
        };

        for field in &meta.crypto_fields {
            let value = match (field.get)(record) {
                Some(v) if !v.is_empty() => v,
                _ => continue,
            };
            if looks_plain(value) {
                continue;
            }
            match rsa::decrypt(key.private_key().expose(), value) {
                Ok(plain) => (field.set)(record, Some(plain)),
                Err(err) => {
                    warn!(
                        field = field.name,
                        %err,
                        "field decrypt failed, leaving stored value"
                    );
                }
            }
        }
    }

    /// Write-path hook over a batch, keyed per record scope.
    pub async fn before_write_batch<T: SecureFields>(
        &self,
        records: &mut [T],
    ) -> PipelineResult<()> {
        for record in records.iter_mut() {
            self.before_write(record).await?;
        }
        Ok(())
    }

    /// Read-path hook over a batch.
    pub async fn after_read_batch<T: SecureFields>(&self, records: &mut [T]) {
        for record in records.iter_mut() {
            self.after_read(record).await;
        }
    }
}

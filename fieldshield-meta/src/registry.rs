//! Per-type metadata resolution and memoization.

use crate::descriptor::FieldDescriptor;
use crate::record::SecureFields;
use fieldshield_types::{CryptoMode, MaskingType};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolved metadata for one record type.
///
/// Built exactly once per `TypeId` and immutable afterwards; shared as an
/// `Arc` so every caller sees the same instance.
pub struct TypeMetadata<T: SecureFields> {
    pub mode: CryptoMode,
    /// Fields eligible for encrypt-on-write / decrypt-on-read.
    pub crypto_fields: Vec<&'static FieldDescriptor<T>>,
    /// Fields with a masking strategy, from field tags plus type-level
    /// hint matches.
    pub masked_fields: Vec<(&'static FieldDescriptor<T>, MaskingType)>,
}

impl<T: SecureFields> TypeMetadata<T> {
    fn build() -> Self {
        let descriptors = T::descriptors();

        let crypto_fields: Vec<_> = descriptors
            .iter()
            .filter(|d| matches!(T::MODE, CryptoMode::All) || d.crypto)
            .collect();

        let mut masked_fields: Vec<_> = descriptors
            .iter()
            .filter_map(|d| d.mask.map(|m| (d, m)))
            .collect();

        // Type-level tags fall back to the variant's field-name hint; a
        // field that already carries its own tag is not overridden.
        for &tag in T::TYPE_MASKS {
            let hint = tag.field_hint();
            if masked_fields.iter().any(|(d, _)| d.name == hint) {
                continue;
            }
            if let Some(d) = descriptors.iter().find(|d| d.name == hint) {
                masked_fields.push((d, tag));
            }
        }

        Self {
            mode: T::MODE,
            crypto_fields,
            masked_fields,
        }
    }

    /// Masking strategy for a field, if any.
    pub fn masking_for(&self, name: &str) -> Option<MaskingType> {
        self.masked_fields
            .iter()
            .find(|(d, _)| d.name == name)
            .map(|&(_, m)| m)
    }

    pub fn has_crypto_fields(&self) -> bool {
        !self.crypto_fields.is_empty()
    }
}

/// Memoizing metadata cache, keyed by `TypeId`.
///
/// Read-mostly: after the first scan of a type every lookup is a shared
/// read-lock hit. Concurrent first-time scans serialize on the write lock
/// and all receive the same `Arc`.
pub struct MetaRegistry {
    cache: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl MetaRegistry {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the metadata for `T`, building it on first encounter.
    pub fn scan<T: SecureFields>(&self) -> Arc<TypeMetadata<T>> {
        let id = TypeId::of::<T>();

        if let Some(entry) = self.cache.read().get(&id) {
            return downcast_entry(Arc::clone(entry));
        }

        let mut cache = self.cache.write();
        let entry = cache
            .entry(id)
            .or_insert_with(|| Arc::new(TypeMetadata::<T>::build()) as Arc<dyn Any + Send + Sync>);
        downcast_entry(Arc::clone(entry))
    }

    /// Number of distinct types scanned so far.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl Default for MetaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast_entry<T: SecureFields>(entry: Arc<dyn Any + Send + Sync>) -> Arc<TypeMetadata<T>> {
    entry
        .downcast()
        .ok()
        .expect("registry entry type is keyed by its TypeId")
}

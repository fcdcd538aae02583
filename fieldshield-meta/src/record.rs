//! The trait every protected business record implements.

use crate::descriptor::FieldDescriptor;
use fieldshield_types::{CryptoMode, KeyScope, MaskingType};

/// A business record participating in the crypto/masking pipeline.
///
/// Implementations declare which fields are protected and how its key
/// material is scoped. Types with an empty descriptor table are valid and
/// pass through every stage untouched.
pub trait SecureFields: Sized + Send + Sync + 'static {
    /// Logical table name; doubles as the default (table-scoped) key id.
    const TABLE: &'static str;

    /// Type-level crypto mode. `All` makes every described field
    /// encryption-eligible; `Partial` defers to per-field tags.
    const MODE: CryptoMode;

    /// Type-level masking tags. Each entry is matched to a descriptor by
    /// the tag's field-name hint; a field-level tag always wins.
    const TYPE_MASKS: &'static [MaskingType] = &[];

    /// The static descriptor table for this type.
    fn descriptors() -> &'static [FieldDescriptor<Self>];

    /// Key scope for this record. Defaults to the shared table key;
    /// row-keyed records override this with their own public key.
    fn key_scope(&self) -> KeyScope {
        KeyScope::table(Self::TABLE)
    }
}

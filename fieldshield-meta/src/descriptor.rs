//! Static per-field descriptors.

use fieldshield_types::{FieldPolicy, MaskingType};

/// Reads the current value of a field. `None` means absent, which the
/// pipeline treats the same as empty.
pub type FieldGetter<T> = for<'a> fn(&'a T) -> Option<&'a str>;

/// Writes a field back. `None` clears the field (used by the serialization
/// filter when a caller is not entitled to see it at all).
pub type FieldSetter<T> = fn(&mut T, Option<String>);

/// Compile-time registered descriptor for one protected string field.
///
/// Built with the `const` builder methods so descriptor tables can live in
/// `const` items:
///
/// ```ignore
/// const FIELDS: &[FieldDescriptor<Employee>] = &[
///     FieldDescriptor::new("name", |r| r.name.as_deref(), |r, v| r.name = v)
///         .masked(MaskingType::Name),
///     FieldDescriptor::new("regist_no", |r| r.regist_no.as_deref(), |r, v| r.regist_no = v)
///         .encrypted()
///         .masked(MaskingType::NationalId),
/// ];
/// ```
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    /// Field-level crypto tag. Consulted together with the type-level
    /// `CryptoMode`: under `All` every descriptor is eligible regardless.
    pub crypto: bool,
    /// Field-level masking tag.
    pub mask: Option<MaskingType>,
    /// Emission policy consumed by the serialization filter.
    pub policy: FieldPolicy,
    pub get: FieldGetter<T>,
    pub set: FieldSetter<T>,
}

impl<T> FieldDescriptor<T> {
    pub const fn new(name: &'static str, get: FieldGetter<T>, set: FieldSetter<T>) -> Self {
        Self {
            name,
            crypto: false,
            mask: None,
            policy: FieldPolicy::OPEN,
            get,
            set,
        }
    }

    /// Tags the field as encryption-eligible.
    pub const fn encrypted(mut self) -> Self {
        self.crypto = true;
        self
    }

    /// Tags the field for display-time masking.
    pub const fn masked(mut self, mask: MaskingType) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Restricts emission to the given roles/channels.
    pub const fn policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }
}

//! Authorization-aware response filtering.
//!
//! Two independent axes gate every field: the access channel (web/mobile)
//! and the caller's role tier. A field failing either axis is omitted
//! entirely; a field that passes is emitted raw for internal staff and
//! masked for external tiers when a masking strategy applies.

use crate::mask::mask;
use fieldshield_meta::{MetaRegistry, SecureFields};
use fieldshield_types::{CallerContext, FieldPolicy, MaskingType};

/// Outcome for one field of one response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldDecision {
    /// Emit the raw value.
    Emit,
    /// Emit the masked rendering.
    Mask,
    /// Drop the field from the response.
    Omit,
}

/// Decides what a caller may see of a field.
pub fn decide(
    policy: &FieldPolicy,
    masking: Option<MaskingType>,
    ctx: &CallerContext,
) -> FieldDecision {
    if !policy.allows_channel(ctx.channel) || !policy.allows_tier(ctx.tier) {
        return FieldDecision::Omit;
    }
    if masking.is_some() && ctx.masking_enabled && !ctx.tier.is_internal() {
        return FieldDecision::Mask;
    }
    FieldDecision::Emit
}

/// Applies the per-field decisions to records in place, just before
/// serialization. Masked values are ephemeral: they exist only in the
/// response copy handed to this filter, never in storage.
pub struct ResponseFilter {
    meta: MetaRegistry,
}

impl ResponseFilter {
    pub fn new() -> Self {
        Self {
            meta: MetaRegistry::new(),
        }
    }

    /// Rewrites one record for the given caller.
    pub fn apply<T: SecureFields>(&self, record: &mut T, ctx: &CallerContext) {
        let meta = self.meta.scan::<T>();

        for descriptor in T::descriptors() {
            let masking = meta.masking_for(descriptor.name);
            match decide(&descriptor.policy, masking, ctx) {
                FieldDecision::Emit => {}
                FieldDecision::Omit => (descriptor.set)(record, None),
                FieldDecision::Mask => {
                    if let Some(kind) = masking {
                        let masked = (descriptor.get)(record).map(|v| mask(kind, v));
                        if let Some(masked) = masked {
                            (descriptor.set)(record, Some(masked));
                        }
                    }
                }
            }
        }
    }

    /// Rewrites a whole result page.
    pub fn apply_all<T: SecureFields>(&self, records: &mut [T], ctx: &CallerContext) {
        for record in records.iter_mut() {
            self.apply(record, ctx);
        }
    }
}

impl Default for ResponseFilter {
    fn default() -> Self {
        Self::new()
    }
}

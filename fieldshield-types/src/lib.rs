//! Shared vocabulary for the FieldShield pipeline.
//!
//! These types are the contract between the metadata layer, the key
//! resolver and the serialization filter: crypto/masking tags declared on
//! business records, key scoping, and the caller identity axes used for
//! response filtering.

use serde::{Deserialize, Serialize};

/// Type-level encryption mode.
///
/// `All`: every described string field of the record is encryption-eligible.
/// `Partial`: only fields whose descriptor carries the crypto tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CryptoMode {
    All,
    Partial,
}

/// Display-time redaction strategy for a PII field.
///
/// Each variant has a fixed masking rule (see `fieldshield-pipeline::mask`)
/// and a logical field-name hint used when the tag is declared at type level
/// instead of on a specific field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskingType {
    Name,
    BirthDate,
    UserId,
    Phone,
    NationalId,
    EmployeeNo,
    Email,
    EmailHard,
    WorkPhone,
}

impl MaskingType {
    /// Logical field name matched against descriptors when the masking tag
    /// is declared on the type rather than on a field.
    pub fn field_hint(self) -> &'static str {
        match self {
            MaskingType::Name => "name",
            MaskingType::BirthDate => "birth_date",
            MaskingType::UserId => "user_id",
            MaskingType::Phone => "phone",
            MaskingType::NationalId => "national_id",
            MaskingType::EmployeeNo => "employee_no",
            MaskingType::Email | MaskingType::EmailHard => "email",
            MaskingType::WorkPhone => "work_phone",
        }
    }
}

/// Scope of an RSA key pair.
///
/// `Table` keys are shared by every row of a logical table; `Row` keys belong
/// to a single record and are looked up by the record's public key, which
/// doubles as its natural identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyScope {
    Table { table: String },
    Row { key_public: String },
}

impl KeyScope {
    pub fn table(table: impl Into<String>) -> Self {
        KeyScope::Table {
            table: table.into(),
        }
    }

    pub fn row(key_public: impl Into<String>) -> Self {
        KeyScope::Row {
            key_public: key_public.into(),
        }
    }

    /// Logical identifier of the scope, used for cache keys and logging.
    /// Safe to log: a row scope's id is its public key.
    pub fn id(&self) -> &str {
        match self {
            KeyScope::Table { table } => table,
            KeyScope::Row { key_public } => key_public,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            KeyScope::Table { .. } => "table",
            KeyScope::Row { .. } => "row",
        }
    }
}

/// Access surface a request originated from. One of the two independent
/// output-filtering axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Web,
    Mobile,
}

/// Caller role tier, the second output-filtering axis.
///
/// Internal staff see raw values; the two external customer tiers receive
/// masked renderings of PII fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    InternalStaff,
    CustomerAdmin,
    CustomerEmployee,
}

impl RoleTier {
    pub fn is_internal(self) -> bool {
        matches!(self, RoleTier::InternalStaff)
    }
}

/// Per-request caller identity, supplied by the session layer.
///
/// `channel` is `None` for calls with no web/mobile surface (batch jobs,
/// service-to-service), in which case the channel axis is skipped.
#[derive(Clone, Copy, Debug)]
pub struct CallerContext {
    pub channel: Option<Channel>,
    pub tier: RoleTier,
    /// Per-request override allowing an authorized caller to disable
    /// masking without changing field policies.
    pub masking_enabled: bool,
}

impl CallerContext {
    pub fn new(channel: Option<Channel>, tier: RoleTier) -> Self {
        Self {
            channel,
            tier,
            masking_enabled: true,
        }
    }

    pub fn internal(channel: Option<Channel>) -> Self {
        Self::new(channel, RoleTier::InternalStaff)
    }

    pub fn without_masking(mut self) -> Self {
        self.masking_enabled = false;
        self
    }
}

/// Emission policy attached to a field descriptor.
///
/// An empty list on either axis means the field is untagged for that axis
/// and passes it for every caller.
#[derive(Clone, Copy, Debug)]
pub struct FieldPolicy {
    pub roles: &'static [RoleTier],
    pub channels: &'static [Channel],
}

impl FieldPolicy {
    /// Untagged on both axes: emitted to every caller.
    pub const OPEN: FieldPolicy = FieldPolicy {
        roles: &[],
        channels: &[],
    };

    pub const fn roles(roles: &'static [RoleTier]) -> Self {
        FieldPolicy {
            roles,
            channels: &[],
        }
    }

    pub const fn channels(channels: &'static [Channel]) -> Self {
        FieldPolicy {
            roles: &[],
            channels,
        }
    }

    pub fn allows_tier(&self, tier: RoleTier) -> bool {
        self.roles.is_empty() || self.roles.contains(&tier)
    }

    /// `None` (no web/mobile surface) passes every channel tag, matching the
    /// original filter's behavior for sessions without an access type.
    pub fn allows_channel(&self, channel: Option<Channel>) -> bool {
        match channel {
            None => true,
            Some(c) => self.channels.is_empty() || self.channels.contains(&c),
        }
    }
}

impl Default for FieldPolicy {
    fn default() -> Self {
        FieldPolicy::OPEN
    }
}

//! Reserved member names.
//!
//! A registry exposes `values` and `value_of` as methods next to its named members, so these
//! spellings can never be member keys. The derive macro rejects them at compile time; the
//! registry builder skips them for hand-written member tables.

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for a reserved member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedNameId {
    Values,
    ValueOf,
    Prototype,
}

/// Metadata for a reserved member name.
pub type ReservedNameInfo = LangItemInfo<ReservedNameId>;

/// Registry of reserved member names.
pub const RESERVED_NAMES: &[ReservedNameInfo] = &[
    ReservedNameInfo {
        id: ReservedNameId::Values,
        canonical: "values",
        aliases: &[],
        description: "Enumerates every member of the enumeration.",
        stability: Stability::Stable,
    },
    ReservedNameInfo {
        id: ReservedNameId::ValueOf,
        canonical: "value_of",
        aliases: &["valueOf"],
        description: "Looks a member up by its backing value.",
        stability: Stability::Stable,
    },
    ReservedNameInfo {
        id: ReservedNameId::Prototype,
        canonical: "prototype",
        aliases: &[],
        description: "Reserved for compatibility; not a registry method.",
        stability: Stability::Deprecated,
    },
];

/// Resolve a spelling to a reserved name.
pub fn from_str(name: &str) -> Option<ReservedNameId> {
    RESERVED_NAMES.iter().find(|r| r.matches(name)).map(|r| r.id)
}

/// Return the canonical spelling for a reserved name.
pub fn as_str(id: ReservedNameId) -> &'static str {
    info_for(id).canonical
}

/// Return full metadata for a reserved name.
pub fn info_for(id: ReservedNameId) -> &'static ReservedNameInfo {
    match id {
        ReservedNameId::Values => &RESERVED_NAMES[0],
        ReservedNameId::ValueOf => &RESERVED_NAMES[1],
        ReservedNameId::Prototype => &RESERVED_NAMES[2],
    }
}

/// Return true if `name` cannot be used as a member key.
#[inline]
pub fn is_reserved(name: &str) -> bool {
    from_str(name).is_some()
}

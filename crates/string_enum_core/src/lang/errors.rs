//! Error kind vocabulary.
//!
//! This registry exists so diagnostics and docs can treat error kind names as shared vocabulary.

use crate::errors::ErrorKind;

use super::registry::{LangItemInfo, Stability};

/// Metadata for an error kind.
pub type ErrorKindInfo = LangItemInfo<ErrorKind>;

/// Registry of error kinds.
pub const ERROR_KINDS: &[ErrorKindInfo] = &[
    ErrorKindInfo {
        id: ErrorKind::InvalidEnumValue,
        canonical: "InvalidEnumValue",
        aliases: &[],
        description: "Raised when a member is constructed without a backing value.",
        stability: Stability::Stable,
    },
    ErrorKindInfo {
        id: ErrorKind::EnumNotFound,
        canonical: "EnumNotFound",
        aliases: &[],
        description: "Raised by strict lookups when no member carries the requested value. `value_of` never raises it.",
        stability: Stability::Stable,
    },
];

/// Return the canonical spelling for an error kind (e.g. `"EnumNotFound"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an error kind.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Resolve a spelling to an error kind.
///
/// Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    ERROR_KINDS.iter().find(|e| e.matches(name)).map(|e| e.id)
}

/// Return full metadata for an error kind.
pub fn info_for(kind: ErrorKind) -> &'static ErrorKindInfo {
    match kind {
        ErrorKind::InvalidEnumValue => &ERROR_KINDS[0],
        ErrorKind::EnumNotFound => &ERROR_KINDS[1],
    }
}

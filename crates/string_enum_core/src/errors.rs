//! Error taxonomy shared by member construction and strict lookups.
//!
//! Canonical kind names (`InvalidEnumValue`, `EnumNotFound`) live in the [`crate::lang::errors`]
//! registry so messages, diagnostics and docs stay aligned.

use miette::Diagnostic;
use thiserror::Error;

use crate::lang;

/// Stable identifier for an enumeration error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A backing value was absent when a member was constructed.
    InvalidEnumValue,
    /// A strict lookup found no member with the requested value.
    EnumNotFound,
}

impl ErrorKind {
    /// Return the canonical kind name (e.g. `"EnumNotFound"`).
    pub fn as_str(self) -> &'static str {
        lang::errors::as_str(self)
    }
}

/// Errors raised by enumeration construction and strict lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EnumError {
    #[error("Invalid Enum value: null")]
    #[diagnostic(
        code(string_enum::invalid_value),
        help("member values must be present; an empty string is accepted")
    )]
    InvalidValue,

    #[error("'{value}' is an invalid value in Enum")]
    #[diagnostic(
        code(string_enum::not_found),
        help("use `value_of` for a non-failing lookup that returns `None`")
    )]
    NotFound { value: String },
}

impl EnumError {
    /// Build an `EnumNotFound` error for `value`.
    pub fn not_found(value: impl Into<String>) -> Self {
        EnumError::NotFound { value: value.into() }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnumError::InvalidValue => ErrorKind::InvalidEnumValue,
            EnumError::NotFound { .. } => ErrorKind::EnumNotFound,
        }
    }

    /// Return the canonical kind name of this error.
    pub fn kind_name(&self) -> &'static str {
        self.kind().as_str()
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn messages_are_canonical() {
        insta::assert_snapshot!(EnumError::InvalidValue.to_string(), @"Invalid Enum value: null");
        insta::assert_snapshot!(
            EnumError::not_found("DELETED").to_string(),
            @"'DELETED' is an invalid value in Enum"
        );
    }

    #[test]
    fn kinds_resolve_to_canonical_names() {
        assert_eq!(EnumError::InvalidValue.kind(), ErrorKind::InvalidEnumValue);
        assert_eq!(EnumError::InvalidValue.kind_name(), "InvalidEnumValue");
        assert_eq!(EnumError::not_found("x").kind_name(), "EnumNotFound");
    }

    #[test]
    fn diagnostic_codes_are_stable() {
        let code = EnumError::not_found("x").code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("string_enum::not_found"));
        let code = EnumError::InvalidValue.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("string_enum::invalid_value"));
    }
}

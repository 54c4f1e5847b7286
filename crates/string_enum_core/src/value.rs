//! The immutable string carried by every enumeration member.
//!
//! ## Notes
//! - Member tables construct values with the `const` [`EnumValue::new`], so they can live in `static` items.
//! - Values built at runtime go through [`EnumValue::try_new`], which rejects an absent value.
//! - Comparison is by value: two independently built values with the same string are equal.
//!
//! ## Examples
//! ```rust
//! use string_enum_core::EnumValue;
//!
//! const RED: EnumValue = EnumValue::new("RED");
//! assert_eq!(RED.as_str(), "RED");
//! assert!(RED.equals("RED"));
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::errors::EnumError;

/// Represent the backing string of one enumeration member.
///
/// There is deliberately no `Ord` impl: members carry no ordering semantics.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EnumValue(Cow<'static, str>);

impl EnumValue {
    /// Construct a value from a `'static` string slice.
    pub const fn new(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Construct a value from an optional runtime string.
    ///
    /// ## Errors
    /// - [`EnumError::InvalidValue`] when `value` is `None`. An empty string is accepted.
    pub fn try_new<S>(value: Option<S>) -> Result<Self, EnumError>
    where
        S: Into<Cow<'static, str>>,
    {
        value.map(|v| Self(v.into())).ok_or(EnumError::InvalidValue)
    }

    /// Return the stored string verbatim.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return true if `other` (a string or anything string-like, members included) has the same value.
    pub fn equals<O>(&self, other: &O) -> bool
    where
        O: AsRef<str> + ?Sized,
    {
        self.as_str() == other.as_ref()
    }

    /// Return true if `other` has the same value. Only accepts another [`EnumValue`].
    pub fn strict_equals(&self, other: &EnumValue) -> bool {
        self.0 == other.0
    }
}

impl fmt::Debug for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumValue").field(&self.as_str()).finish()
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EnumValue {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for EnumValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for EnumValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

//! The base enumeration abstraction.
//!
//! Every concrete enumeration implements [`Enumeration`] by declaring a `static` table of [`Member`] entries, in
//! declaration order. `#[derive(Enumeration)]` writes that table for field-less enums; the trait can also be
//! implemented by hand (see the tests below).
//!
//! Identity is by value: members compare through their backing [`EnumValue`], never by variant or address.

use string_enum_core::{EnumError, EnumValue};

/// One entry of an enumeration's member table.
///
/// ## Notes
/// - `name` is the member's key in a [`Registry`](crate::Registry).
/// - Constructed with a `const fn` so member tables can be `static`.
#[derive(Debug)]
pub struct Member<E: 'static> {
    name: &'static str,
    member: E,
    value: EnumValue,
}

impl<E: 'static> Member<E> {
    /// Build a table entry.
    pub const fn new(name: &'static str, member: E, value: EnumValue) -> Self {
        Self { name, member, value }
    }

    /// Return the declared member name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the member itself.
    pub fn member(&self) -> &E {
        &self.member
    }

    /// Return the member's backing value.
    pub fn value(&self) -> &EnumValue {
        &self.value
    }
}

/// A closed set of named, string-backed singleton members.
///
/// Implementors provide the member table; everything else is derived from it.
///
/// # Examples
///
/// ```rust
/// use string_enum::prelude::*;
///
/// #[derive(Debug, Clone, Copy, Enumeration)]
/// #[enumeration(rename_all = "lowercase")]
/// enum Status {
///     Active,
///     Deleted,
/// }
///
/// assert_eq!(Status::Active.as_str(), "active");
/// assert!(Status::Active.equals("active"));
/// assert!(!Status::Active.equals(&Status::Deleted));
/// assert!(Status::try_value_of("archived").is_err());
/// ```
pub trait Enumeration: Sized + Sync + 'static {
    /// Name of the enumeration type, used in logs and diagnostics.
    const TYPE_NAME: &'static str;

    /// Return the member table in declaration order.
    fn members() -> &'static [Member<Self>];

    /// Return the backing value of this member.
    ///
    /// Must be a reference into this member's own [`Member`] entry in [`Enumeration::members`], not an equal
    /// value stored elsewhere: [`Enumeration::member_name`] finds the entry by address and returns `""` when
    /// none matches. The derive macro upholds this.
    fn enum_value(&self) -> &'static EnumValue;

    /// Return every member in declaration order.
    ///
    /// Each call returns a fresh `Vec`; the members themselves are the `static` singletons.
    fn values() -> Vec<&'static Self> {
        Self::members().iter().map(Member::member).collect()
    }

    /// Return the first member (declaration order) whose value equals `value`, or `None`.
    ///
    /// Never fails; see [`Enumeration::try_value_of`] for a lookup that reports `EnumNotFound`.
    fn value_of(value: &str) -> Option<&'static Self> {
        Self::members()
            .iter()
            .find(|entry| entry.value().as_str() == value)
            .map(Member::member)
    }

    /// Like [`Enumeration::value_of`], but a missing value is an [`EnumError::NotFound`].
    fn try_value_of(value: &str) -> Result<&'static Self, EnumError> {
        Self::value_of(value).ok_or_else(|| EnumError::not_found(value))
    }

    /// Return the backing value verbatim.
    fn as_str(&self) -> &'static str {
        self.enum_value().as_str()
    }

    /// Return the declared member name (the registry key).
    fn member_name(&self) -> &'static str {
        let value = self.enum_value();
        Self::members()
            .iter()
            .find(|entry| std::ptr::eq(entry.value(), value))
            .map_or("", Member::name)
    }

    /// Compare against a string or another member by value.
    fn equals<O>(&self, other: &O) -> bool
    where
        O: AsRef<str> + ?Sized,
    {
        self.enum_value().equals(other)
    }

    /// Compare against another member of the same enumeration by value.
    fn strict_equals(&self, other: &Self) -> bool {
        self.enum_value().strict_equals(other.enum_value())
    }
}

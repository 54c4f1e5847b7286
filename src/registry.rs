//! Frozen, name-keyed registries over an enumeration's members.
//!
//! [`create_enum`] copies an enumeration's member table into a [`Registry`]: a read-only mapping from member name
//! to the `static` member, plus `values()` / `value_of()` delegating to the enumeration type. Consumers can use the
//! registry as a namespace of named constants (`registry["RED"]`) or as a lookup/iteration surface.
//!
//! ## Notes
//! - A registry is immutable by construction: storage is a boxed slice and there is no `&mut self` API.
//! - Members are shared with the enumeration's table, never cloned.
//! - Reserved names (`values`, `value_of`/`valueOf`, `prototype`) are never registry keys.
//!
//! ## Examples
//! ```rust
//! use string_enum::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, Enumeration)]
//! #[enumeration(rename_all = "kebab-case")]
//! enum Phase {
//!     Draft,
//!     InReview,
//! }
//!
//! let phases = create_enum::<Phase>();
//! assert_eq!(phases.keys().collect::<Vec<_>>(), vec!["Draft", "InReview"]);
//! assert_eq!(phases.value_of("in-review"), Some(&Phase::InReview));
//! ```

use std::fmt;
use std::iter::Copied;
use std::ops::Index;
use std::slice;

use string_enum_core::EnumError;
use string_enum_core::lang::reserved;

use crate::enumeration::Enumeration;

/// A frozen mapping from member name to member for one enumeration type.
///
/// There is no way to change a registry once built. Entries cannot be replaced:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Debug, Clone, Copy, Enumeration)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// let mut colors = create_enum::<Color>();
/// colors["Red"] = Color::Green;
/// ```
///
/// nor added:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Debug, Clone, Copy, Enumeration)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// let mut colors = create_enum::<Color>();
/// colors.insert("Blue", &Color::Red);
/// ```
///
/// and the backing storage is private:
/// ```compile_fail
/// use string_enum::prelude::*;
///
/// #[derive(Debug, Clone, Copy, Enumeration)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// let mut colors = create_enum::<Color>();
/// colors.entries = Box::new([]);
/// ```
pub struct Registry<E: Enumeration> {
    entries: Box<[(&'static str, &'static E)]>,
}

/// Build the registry for `E`.
///
/// Walks the member table in declaration order, drops reserved names and freezes the rest. Never fails: an
/// enumeration without members yields an empty registry whose `value_of` always returns `None`.
///
/// Intended to be called once per enumeration type, during initialization.
#[tracing::instrument(skip_all, fields(enumeration = E::TYPE_NAME))]
pub fn create_enum<E: Enumeration>() -> Registry<E> {
    let members = E::members();
    let mut entries = Vec::with_capacity(members.len());

    for (i, entry) in members.iter().enumerate() {
        if reserved::is_reserved(entry.name()) {
            tracing::trace!(name = entry.name(), "skipping reserved member name");
            continue;
        }
        if let Some(first) = members[..i]
            .iter()
            .find(|earlier| earlier.value().strict_equals(entry.value()))
        {
            tracing::warn!(
                value = entry.value().as_str(),
                first = first.name(),
                duplicate = entry.name(),
                "duplicate member value; lookups resolve to the first declaration"
            );
        }
        entries.push((entry.name(), entry.member()));
    }

    tracing::debug!(member_count = entries.len(), "built enumeration registry");
    Registry {
        entries: entries.into_boxed_slice(),
    }
}

impl<E: Enumeration> Registry<E> {
    /// Return the member registered under `name`.
    pub fn get(&self, name: &str) -> Option<&'static E> {
        self.entries
            .iter()
            .find_map(|&(key, member)| (key == name).then_some(member))
    }

    /// Return true if a member is registered under `name`.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over member names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(key, _)| key)
    }

    /// Iterate over `(name, member)` pairs in declaration order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, (&'static str, &'static E)>> {
        self.entries.iter().copied()
    }

    /// Return the number of registered members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if no member is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return every member of the enumeration. Delegates to [`Enumeration::values`].
    pub fn values(&self) -> Vec<&'static E> {
        E::values()
    }

    /// Look a member up by value. Delegates to [`Enumeration::value_of`].
    pub fn value_of(&self, value: &str) -> Option<&'static E> {
        E::value_of(value)
    }

    /// Strict lookup by value. Delegates to [`Enumeration::try_value_of`].
    pub fn try_value_of(&self, value: &str) -> Result<&'static E, EnumError> {
        E::try_value_of(value)
    }
}

impl<E: Enumeration> Clone for Registry<E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<E: Enumeration> Index<&str> for Registry<E> {
    type Output = E;

    /// Return the member registered under `name`.
    ///
    /// ## Panics
    /// Panics if no member is registered under `name`.
    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(member) => member,
            None => panic!("no member named `{name}` in enumeration {}", E::TYPE_NAME),
        }
    }
}

impl<'a, E: Enumeration> IntoIterator for &'a Registry<E> {
    type Item = (&'static str, &'static E);
    type IntoIter = Copied<slice::Iter<'a, (&'static str, &'static E)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Enumeration> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registry<{}> ", E::TYPE_NAME)?;
        f.debug_map()
            .entries(self.entries.iter().map(|&(key, member)| (key, member.as_str())))
            .finish()
    }
}

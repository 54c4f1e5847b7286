//! Shareable metadata for `string_enum_core::lang` registries.
//!
//! Every vocabulary in [`crate::lang`] is a `const` table of [`LangItemInfo`] entries. This
//! submodule holds that shared shape.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for diagnostics and docs; enforcement lives in the derive macro and runtime.

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Examples
/// ```rust
/// use string_enum_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description`)
/// - lifecycle (`stability`)
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub stability: Stability,
}

impl<Id> LangItemInfo<Id> {
    /// Return true if `name` is the canonical spelling or one of the aliases (case-sensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

//! Rename rules for deriving member values from variant identifiers.
//!
//! `#[enumeration(rename_all = "...")]` accepts the canonical spellings in [`RENAME_RULES`]. Word
//! boundaries are underscores, hyphens, lower-to-upper transitions, digit-to-upper transitions and
//! the last capital of an acronym followed by a lowercase letter (`HTTPServer` -> `HTTP`, `Server`).
//!
//! ## Examples
//! ```rust
//! use string_enum_core::lang::rename::{self, RenameRule};
//!
//! let rule = rename::from_str("SCREAMING_SNAKE_CASE").unwrap();
//! assert_eq!(rule, RenameRule::ScreamingSnakeCase);
//! assert_eq!(rule.apply("InProgress"), "IN_PROGRESS");
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for a rename rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenameRule {
    /// Use the identifier unchanged.
    #[default]
    Verbatim,
    Lowercase,
    Uppercase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    CamelCase,
    PascalCase,
}

/// Metadata for a rename rule.
pub type RenameRuleInfo = LangItemInfo<RenameRule>;

/// Registry of rename rules accepted by `rename_all`.
pub const RENAME_RULES: &[RenameRuleInfo] = &[
    info(RenameRule::Verbatim, "verbatim", "Keep the variant identifier as written."),
    info(RenameRule::Lowercase, "lowercase", "Lowercase the whole identifier."),
    info(RenameRule::Uppercase, "UPPERCASE", "Uppercase the whole identifier."),
    info(RenameRule::SnakeCase, "snake_case", "Lowercase words joined by `_`."),
    info(
        RenameRule::ScreamingSnakeCase,
        "SCREAMING_SNAKE_CASE",
        "Uppercase words joined by `_`.",
    ),
    info(RenameRule::KebabCase, "kebab-case", "Lowercase words joined by `-`."),
    info(
        RenameRule::CamelCase,
        "camelCase",
        "First word lowercase, following words capitalized, no separator.",
    ),
    info(RenameRule::PascalCase, "PascalCase", "Every word capitalized, no separator."),
];

/// Resolve a spelling to a rename rule.
///
/// Matching is case-sensitive, so `"lowercase"` and `"UPPERCASE"` stay distinct.
pub fn from_str(name: &str) -> Option<RenameRule> {
    RENAME_RULES.iter().find(|r| r.matches(name)).map(|r| r.id)
}

/// Return the canonical spelling for a rename rule.
pub fn as_str(rule: RenameRule) -> &'static str {
    RENAME_RULES
        .iter()
        .find(|r| r.id == rule)
        .map_or("verbatim", |r| r.canonical)
}

/// Return a comma-separated list of accepted spellings, for diagnostics.
pub fn accepted_spellings() -> String {
    RENAME_RULES
        .iter()
        .map(|r| format!("`{}`", r.canonical))
        .collect::<Vec<_>>()
        .join(", ")
}

impl RenameRule {
    /// Apply this rule to a variant identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::Verbatim => ident.to_string(),
            RenameRule::Lowercase => ident.to_lowercase(),
            RenameRule::Uppercase => ident.to_uppercase(),
            RenameRule::SnakeCase => join_words(ident, "_", str::to_lowercase),
            RenameRule::ScreamingSnakeCase => join_words(ident, "_", str::to_uppercase),
            RenameRule::KebabCase => join_words(ident, "-", str::to_lowercase),
            RenameRule::PascalCase => join_words(ident, "", capitalize),
            RenameRule::CamelCase => {
                let mut words = split_words(ident).into_iter();
                let mut out = words.next().map(|w| w.to_lowercase()).unwrap_or_default();
                for word in words {
                    out.push_str(&capitalize(&word));
                }
                out
            }
        }
    }
}

fn join_words(ident: &str, sep: &str, f: impl Fn(&str) -> String) -> String {
    split_words(ident).iter().map(|w| f(w.as_str())).collect::<Vec<_>>().join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn split_words(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        // `current` is non-empty, so `i > 0`.
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

const fn info(id: RenameRule, canonical: &'static str, description: &'static str) -> RenameRuleInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        stability: Stability::Stable,
    }
}

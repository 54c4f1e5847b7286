#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! String-backed enumerations: closed sets of named, singleton members carrying an immutable string value.
//!
//! A concrete enumeration declares its members once (usually with `#[derive(Enumeration)]`), then callers can
//! enumerate them ([`Enumeration::values`]), resolve one by value ([`Enumeration::value_of`]) and compare by value
//! ([`Enumeration::equals`]). [`create_enum`] builds a frozen, name-keyed [`Registry`] over the same members.
//!
//! ## Panic Policy
//!
//! - **Library code**: lookups return `Option` / `Result`; nothing here panics except
//!   `Registry`'s `Index` impl on a missing key (same contract as `HashMap`).
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use string_enum::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, Enumeration)]
//! enum Color {
//!     RED,
//!     GREEN,
//! }
//!
//! assert_eq!(Color::values(), vec![&Color::RED, &Color::GREEN]);
//! assert_eq!(Color::value_of("GREEN"), Some(&Color::GREEN));
//! assert_eq!(Color::value_of("BLUE"), None);
//!
//! let colors = create_enum::<Color>();
//! assert_eq!(colors["RED"], Color::RED);
//! assert_eq!(colors.value_of("RED"), Some(&Color::RED));
//! ```

pub mod enumeration;
pub mod prelude;
pub mod registry;

pub use enumeration::{Enumeration, Member};
pub use registry::{Registry, create_enum};
pub use string_enum_core::{EnumError, EnumValue, ErrorKind, lang};
pub use string_enum_derive::Enumeration;

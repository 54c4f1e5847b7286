//! Provide the backing value, error taxonomy and shared vocabulary for string-backed enumerations.
//!
//! This crate is intentionally small. It contains deterministic helpers that both:
//! - the derive macro can use while expanding member tables (rename rules, reserved names), and
//! - the runtime crate can use to store, compare and report on member values.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no macro-specific types.
//! - Current scope: [`EnumValue`] (the immutable string every member carries), [`EnumError`] and
//!   the vocabulary registries under [`lang`].

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod lang;
pub mod value;

pub use errors::{EnumError, ErrorKind};
pub use value::EnumValue;

//! Vocabulary registries shared by the derive macro and the runtime.
//!
//! The design goal is to avoid stringly-typed checks scattered across the macro and runtime.
//! Callers work with **stable IDs** (e.g. [`errors::ErrorKind`](crate::errors::ErrorKind),
//! [`reserved::ReservedNameId`], [`rename::RenameRule`]) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no syntax types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use string_enum_core::lang::reserved::{self, ReservedNameId};
//!
//! assert_eq!(reserved::from_str("valueOf"), Some(ReservedNameId::ValueOf));
//! assert_eq!(reserved::as_str(ReservedNameId::ValueOf), "value_of");
//! ```

pub mod errors;
pub mod registry;
pub mod rename;
pub mod reserved;

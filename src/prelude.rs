//! Prelude module for common imports.
//!
//! ```ignore
//! use string_enum::prelude::*;
//! ```

// The trait and its derive macro share the name `Enumeration`; one `use` brings both in.
pub use crate::Enumeration;
pub use crate::registry::{Registry, create_enum};
pub use string_enum_core::{EnumError, EnumValue};

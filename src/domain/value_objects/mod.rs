//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod extension;
mod header;

pub use extension::{Extension, DEFAULT_EXTENSION};
pub use header::{Header, DEFAULT_LICENSE};

//! Domain Layer
//!
//! Pure stamping logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Header, Extension)
//! - `services/` - The stamping rule
//! - `ports/` - Interface definitions for infrastructure

pub mod ports;
pub mod services;
pub mod value_objects;

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports plus the directory walker.

pub mod discovery;
pub mod fs;

pub use discovery::{discover, Discovery};
pub use fs::LocalFs;

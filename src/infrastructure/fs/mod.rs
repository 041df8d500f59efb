//! File system implementations

mod local;
#[cfg(test)]
mod memory;

pub use local::{rewrite_in_place, LocalFs};
#[cfg(test)]
pub use memory::MemoryFs;

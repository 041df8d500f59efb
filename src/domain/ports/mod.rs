//! Ports (interfaces) for infrastructure

mod source_fs;

pub use source_fs::SourceFs;

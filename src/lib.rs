//! spdx-stamp - prepend SPDX license headers to source files
//!
//! Walks a directory tree, finds files with one extension, and inserts a
//! license header at the top of each file that does not already contain it.
//! Running it again changes nothing.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    ensure_header_present, run, run_with_fs, Injector, Mode, Outcome, RunOptions, RunReport,
    StampEvent,
};
pub use domain::ports::SourceFs;
pub use domain::services::stamp;
pub use domain::value_objects::{Extension, Header, DEFAULT_EXTENSION, DEFAULT_LICENSE};
pub use error::{StampError, StampResult};
pub use infrastructure::{discover, Discovery, LocalFs};

//! Application Layer
//!
//! Use cases built on the domain and infrastructure layers: stamping a
//! single file and driving a whole run.

pub mod events;
pub mod injector;
pub mod runner;

pub use events::StampEvent;
pub use injector::{ensure_header_present, Injector, Outcome};
pub use runner::{run, run_with_fs, FailedPath, Mode, RunOptions, RunReport};

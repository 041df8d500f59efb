//! Error types for spdx-stamp
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stamping operations
pub type StampResult<T> = Result<T, StampError>;

/// Main error type for stamping operations
#[derive(Error, Debug)]
pub enum StampError {
    /// File could not be opened, read or rewritten
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("{path} is not valid UTF-8 text")]
    Encoding { path: PathBuf },

    /// A branch of the directory walk failed
    #[error("cannot traverse {path}: {message}")]
    Discovery { path: PathBuf, message: String },

    /// Root is missing or not a directory
    #[error("directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Header text is empty
    #[error("license header must not be empty")]
    InvalidHeader,

    /// Extension filter cannot match a file name
    #[error("invalid extension '{value}': {reason}")]
    InvalidExtension { value: String, reason: &'static str },
}

impl StampError {
    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            StampError::FileAccess { path, .. }
            | StampError::Encoding { path }
            | StampError::Discovery { path, .. }
            | StampError::RootNotFound { path } => Some(path),
            StampError::InvalidHeader | StampError::InvalidExtension { .. } => None,
        }
    }

    /// Stable identifier used in NDJSON output.
    pub fn code(&self) -> &'static str {
        match self {
            StampError::FileAccess { .. } => "file_access",
            StampError::Encoding { .. } => "encoding",
            StampError::Discovery { .. } => "discovery",
            StampError::RootNotFound { .. } => "root_not_found",
            StampError::InvalidHeader => "invalid_header",
            StampError::InvalidExtension { .. } => "invalid_extension",
        }
    }
}

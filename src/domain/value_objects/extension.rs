//! File extension filter
//!
//! A run targets exactly one suffix, e.g. `go` for `*.go`.

use std::fmt;
use std::path::Path;

use crate::error::{StampError, StampResult};

/// Extension used when none is given.
pub const DEFAULT_EXTENSION: &str = "go";

/// Validated file suffix, stored without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    name: String,
    suffix: String,
}

impl Extension {
    /// Accepts `go` or `.go`.
    pub fn new(value: &str) -> StampResult<Self> {
        let name = value.trim().strip_prefix('.').unwrap_or(value.trim());

        if name.is_empty() {
            return Err(StampError::InvalidExtension {
                value: value.to_string(),
                reason: "extension is empty",
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(StampError::InvalidExtension {
                value: value.to_string(),
                reason: "extension must not contain a path separator",
            });
        }
        if name.chars().all(|c| c == '.') {
            return Err(StampError::InvalidExtension {
                value: value.to_string(),
                reason: "extension must contain a non-dot character",
            });
        }

        Ok(Self {
            name: name.to_string(),
            suffix: format!(".{}", name),
        })
    }

    /// Extension without the leading dot.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// True when the file name ends with `.<ext>`. Case-sensitive.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&self.suffix))
            .unwrap_or(false)
    }
}

impl Default for Extension {
    fn default() -> Self {
        Self {
            name: DEFAULT_EXTENSION.to_string(),
            suffix: format!(".{}", DEFAULT_EXTENSION),
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix)
    }
}

//! Header injection for a single file

use std::path::Path;

use crate::domain::ports::SourceFs;
use crate::domain::services::stamp;
use crate::domain::value_objects::Header;
use crate::error::{StampError, StampResult};
use crate::infrastructure::fs::LocalFs;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Header was inserted
    Modified,
    /// Header already present, nothing written
    Unchanged,
    /// Header absent, reported only (check mode)
    Missing,
}

impl Outcome {
    pub fn is_modified(self) -> bool {
        self == Outcome::Modified
    }
}

/// Applies a header to files through a `SourceFs`.
pub struct Injector<F: SourceFs> {
    fs: F,
}

impl<F: SourceFs> Injector<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Insert `header` at the top of `path` unless it already occurs anywhere in it.
    ///
    /// Idempotent: a second call on the same file returns `Unchanged`.
    pub fn ensure_header_present(&self, path: &Path, header: &Header) -> StampResult<Outcome> {
        let content = self.load(path)?;

        let Some(updated) = stamp(&content, header) else {
            log::debug!("header already present in {}", path.display());
            return Ok(Outcome::Unchanged);
        };

        self.fs
            .write_source(path, updated.as_bytes())
            .map_err(|source| StampError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("stamped {}", path.display());
        Ok(Outcome::Modified)
    }

    /// Report whether `path` carries `header` without writing anything.
    pub fn check(&self, path: &Path, header: &Header) -> StampResult<Outcome> {
        let content = self.load(path)?;
        if header.is_present_in(&content) {
            Ok(Outcome::Unchanged)
        } else {
            Ok(Outcome::Missing)
        }
    }

    fn load(&self, path: &Path) -> StampResult<String> {
        let bytes = self
            .fs
            .read_source(path)
            .map_err(|source| StampError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        String::from_utf8(bytes).map_err(|_| StampError::Encoding {
            path: path.to_path_buf(),
        })
    }
}

/// `Injector::ensure_header_present` on the local disk.
pub fn ensure_header_present(path: &Path, header: &Header) -> StampResult<Outcome> {
    Injector::new(LocalFs::new()).ensure_header_present(path, header)
}

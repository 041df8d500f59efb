//! Local File System Implementation
//!
//! Implements the SourceFs port for local disk operations.

use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::domain::ports::SourceFs;

/// Local file system implementation
///
/// Files are rewritten in place through a read+write handle, so the inode,
/// owner, permissions, hard links and symlinks all stay as they were, and no
/// write access to the containing directory is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl SourceFs for LocalFs {
    fn read_source(&self, path: &Path) -> io::Result<Vec<u8>> {
        // Opened read+write so an unwritable file fails here, before any decision.
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    fn write_source(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        rewrite_in_place(path, content)
    }
}

/// Replace the content of the existing file at `path` without recreating it.
pub fn rewrite_in_place(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).open(path)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(content)?;
    file.set_len(content.len() as u64)?;
    file.sync_all()
}

//! SourceFs port - abstraction over reading and rewriting source files
//!
//! Lets the injector run against local disk or an in-memory mock.

use std::io;
use std::path::Path;

/// Read/write access to candidate source files.
///
/// Implementations:
/// - `LocalFs` - local disk, in-place rewrite
/// - `MemoryFs` - in-memory, for tests
pub trait SourceFs {
    /// Read the whole file.
    ///
    /// Must fail if the file is not also writable, so that a file the tool
    /// could never rewrite is reported before any decision is made.
    fn read_source(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file content.
    fn write_source(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

impl<T: SourceFs + ?Sized> SourceFs for &T {
    fn read_source(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read_source(path)
    }

    fn write_source(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        (**self).write_source(path, content)
    }
}

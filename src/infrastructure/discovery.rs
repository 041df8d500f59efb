//! Recursive discovery of candidate files
//!
//! Walks every directory under the root with the `ignore` crate's walker,
//! with all of its standard filters turned off: hidden entries and
//! `.gitignore` rules are not honoured.

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::domain::value_objects::Extension;
use crate::error::{StampError, StampResult};

/// Lazy sequence of files under a root whose names match an extension.
///
/// Entries are sorted by file name at each level, so the order is stable
/// for a given tree. A branch that cannot be read yields one
/// `StampError::Discovery` item and is skipped; the rest of the walk
/// continues.
pub struct Discovery {
    walk: Walk,
    extension: Extension,
}

/// Start a fresh traversal of `root`.
pub fn discover(root: &Path, extension: &Extension) -> Discovery {
    let walk = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    Discovery {
        walk,
        extension: extension.clone(),
    }
}

impl Iterator for Discovery {
    type Item = StampResult<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = error_path(&err).unwrap_or_default();
                    log::debug!("discovery error under {}: {}", path.display(), err);
                    return Some(Err(StampError::Discovery {
                        path,
                        message: err.to_string(),
                    }));
                }
            };

            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir || !self.extension.matches(entry.path()) {
                log::trace!("skip {}", entry.path().display());
                continue;
            }

            log::debug!("found {}", entry.path().display());
            return Some(Ok(entry.into_path()));
        }
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

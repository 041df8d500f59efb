//! Driver: discover files, then process each one independently
//!
//! Per-file and per-branch failures never abort the walk. Each is reported
//! as an `Error` event and recorded in the report; the caller decides the
//! exit status from `RunReport::is_success`.

use std::path::{Path, PathBuf};

use crate::application::events::StampEvent;
use crate::application::injector::{Injector, Outcome};
use crate::domain::ports::SourceFs;
use crate::domain::value_objects::{Extension, Header};
use crate::error::{StampError, StampResult};
use crate::infrastructure::discovery::discover;
use crate::infrastructure::fs::LocalFs;

/// Whether files are rewritten or only inspected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Apply,
    Check,
}

/// Everything a run needs, passed explicitly.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    pub extension: Extension,
    pub header: Header,
    pub mode: Mode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: Extension::default(),
            header: Header::default(),
            mode: Mode::Apply,
        }
    }
}

/// A path that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPath {
    pub path: PathBuf,
    pub code: &'static str,
    pub message: String,
}

/// Result of a run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Files the header was inserted into
    pub modified: Vec<PathBuf>,
    /// Files that already carried the header
    pub unchanged: Vec<PathBuf>,
    /// Files lacking the header (check mode only)
    pub missing: Vec<PathBuf>,
    pub errors: Vec<FailedPath>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.missing.is_empty()
    }
}

/// Run on the local disk.
pub fn run(options: &RunOptions, on_event: impl FnMut(&StampEvent)) -> StampResult<RunReport> {
    run_with_fs(LocalFs::new(), options, on_event)
}

/// Run with a custom `SourceFs`. Discovery always walks the real directory tree.
pub fn run_with_fs<F: SourceFs>(
    fs: F,
    options: &RunOptions,
    mut on_event: impl FnMut(&StampEvent),
) -> StampResult<RunReport> {
    ensure_root(&options.root)?;

    let injector = Injector::new(fs);
    let mut report = RunReport::default();

    on_event(&StampEvent::Started {
        root: options.root.display().to_string(),
        extension: options.extension.to_string(),
    });

    for found in discover(&options.root, &options.extension) {
        let result = found.and_then(|path| {
            let outcome = match options.mode {
                Mode::Apply => injector.ensure_header_present(&path, &options.header),
                Mode::Check => injector.check(&path, &options.header),
            };
            outcome.map(|o| (path, o))
        });

        match result {
            Ok((path, outcome)) => {
                let display = path.display().to_string();
                let event = match outcome {
                    Outcome::Modified => {
                        report.modified.push(path);
                        StampEvent::Stamped { path: display }
                    }
                    Outcome::Unchanged => {
                        report.unchanged.push(path);
                        StampEvent::AlreadyPresent { path: display }
                    }
                    Outcome::Missing => {
                        report.missing.push(path);
                        StampEvent::MissingHeader { path: display }
                    }
                };
                on_event(&event);
            }
            Err(err) => {
                log::warn!("{}", err);
                let failed = failed_path(&err, &options.root);
                on_event(&StampEvent::Error {
                    path: failed.path.display().to_string(),
                    code: failed.code,
                    message: failed.message.clone(),
                });
                report.errors.push(failed);
            }
        }
    }

    on_event(&StampEvent::Complete {
        modified: report.modified.len(),
        unchanged: report.unchanged.len(),
        missing: report.missing.len(),
        errors: report.errors.len(),
    });

    Ok(report)
}

fn ensure_root(root: &Path) -> StampResult<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(StampError::RootNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// Errors that carry no path are attributed to the walk root.
fn failed_path(err: &StampError, root: &Path) -> FailedPath {
    let path = match err.path() {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => root.to_path_buf(),
    };
    FailedPath {
        path,
        code: err.code(),
        message: err.to_string(),
    }
}

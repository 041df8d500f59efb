//! Run event types for progress and NDJSON output

use serde::Serialize;

/// One event per processed path, plus start and completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StampEvent {
    Started {
        root: String,
        extension: String,
    },
    Stamped {
        path: String,
    },
    AlreadyPresent {
        path: String,
    },
    MissingHeader {
        path: String,
    },
    Error {
        path: String,
        code: &'static str,
        message: String,
    },
    Complete {
        modified: usize,
        unchanged: usize,
        missing: usize,
        errors: usize,
    },
}

impl StampEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

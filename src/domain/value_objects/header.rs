//! License Header Value Object
//!
//! The literal text block inserted at the top of each processed file.
//! Immutable for the lifetime of a run and passed explicitly to the injector.

use std::fmt;

use crate::error::{StampError, StampResult};

/// License identifier used when none is given.
pub const DEFAULT_LICENSE: &str = "Apache-2.0";

/// Validated license header text.
///
/// The stored text always ends with a single line terminator, so
/// `"// SPDX-License-Identifier: MIT"` and the same string followed by
/// `"\n"` build equal headers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header(String);

impl Header {
    /// Build a header from literal text.
    pub fn new(text: impl Into<String>) -> StampResult<Self> {
        let text: String = text.into();
        let mut text = normalize_newlines(&text);
        if text.trim().is_empty() {
            return Err(StampError::InvalidHeader);
        }
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(Self(text))
    }

    /// Build a `// SPDX-License-Identifier: <id>` header.
    pub fn spdx(identifier: &str) -> StampResult<Self> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(StampError::InvalidHeader);
        }
        Self::new(format!("// SPDX-License-Identifier: {}", identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the header occurs anywhere in `content`, not only at the start.
    ///
    /// `\r\n` and lone `\r` line endings in `content` count as `\n`, so a
    /// CRLF file that already carries the header is recognised.
    pub fn is_present_in(&self, content: &str) -> bool {
        if content.contains(self.0.as_str()) {
            return true;
        }
        content.contains('\r') && normalize_newlines(content).contains(self.0.as_str())
    }

    /// Header, one blank line, then `content` unchanged.
    pub fn prepend_to(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + 1 + content.len());
        out.push_str(&self.0);
        out.push('\n');
        out.push_str(content);
        out
    }
}

impl Default for Header {
    fn default() -> Self {
        Self(format!("// SPDX-License-Identifier: {}\n", DEFAULT_LICENSE))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end_matches('\n'))
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

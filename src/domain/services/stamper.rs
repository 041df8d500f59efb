//! Header stamping rule
//!
//! Pure function deciding the new content of a file. No I/O.

use crate::domain::value_objects::Header;

/// New content for `content`, or `None` if the header is already present.
pub fn stamp(content: &str, header: &Header) -> Option<String> {
    if header.is_present_in(content) {
        return None;
    }
    Some(header.prepend_to(content))
}

use crossterm::style::Color;

/// Design tokens for the spdx-stamp console output.
///
/// All icons and colors used by `ui::output` come from here.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const STAMPED: &str = "✓";
    pub const UNCHANGED: &str = "·";
    pub const MISSING: &str = "⚠";
    pub const ERROR: &str = "✗";
    pub const STAMP: &str = "§";
}

pub mod icons_ascii {
    pub const STAMPED: &str = "[OK]";
    pub const UNCHANGED: &str = "[--]";
    pub const MISSING: &str = "[WARN]";
    pub const ERROR: &str = "[FAIL]";
    pub const STAMP: &str = "[STAMP]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Stamped,
    Unchanged,
    Missing,
    Error,
    Stamp,
}

impl Icon {
    pub fn as_str(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Stamped, true) => icons::STAMPED,
            (Icon::Stamped, false) => icons_ascii::STAMPED,
            (Icon::Unchanged, true) => icons::UNCHANGED,
            (Icon::Unchanged, false) => icons_ascii::UNCHANGED,
            (Icon::Missing, true) => icons::MISSING,
            (Icon::Missing, false) => icons_ascii::MISSING,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Stamp, true) => icons::STAMP,
            (Icon::Stamp, false) => icons_ascii::STAMP,
        }
    }
}

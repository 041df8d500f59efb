use std::io::{self, Write};

use spdx_stamp::StampEvent;

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::text::{ColoredText, SemanticColor};
use crate::ui::theme::Icon;

/// Where a rendered line goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Out(String),
    Err(String),
}

/// Prints run events as text lines or NDJSON.
pub struct EventPrinter {
    caps: TerminalCapabilities,
    json: bool,
    check: bool,
}

impl EventPrinter {
    pub fn new(caps: TerminalCapabilities, json: bool, check: bool) -> Self {
        Self { caps, json, check }
    }

    pub fn print(&self, event: &StampEvent) {
        // A closed stdout (e.g. `| head`) must not abort the run.
        let _ = match self.render(event) {
            Line::Out(line) => writeln!(io::stdout().lock(), "{}", line),
            Line::Err(line) => writeln!(io::stderr().lock(), "{}", line),
        };
    }

    pub fn render(&self, event: &StampEvent) -> Line {
        if self.json {
            return Line::Out(event.to_json());
        }

        let unicode = self.caps.supports_unicode;
        let color = self.caps.supports_color;
        let icon = |icon: Icon, c: SemanticColor| ColoredText::new(icon.as_str(unicode), c).render(color);

        match event {
            StampEvent::Started { root, extension } => {
                let verb = if self.check { "Checking" } else { "Stamping" };
                Line::Out(format!(
                    "{} {} *{} under {}",
                    Icon::Stamp.as_str(unicode),
                    verb,
                    extension,
                    root
                ))
            }
            StampEvent::Stamped { path } => Line::Out(format!(
                "{} Added license header to {}",
                icon(Icon::Stamped, SemanticColor::Success),
                path
            )),
            StampEvent::AlreadyPresent { path } => Line::Out(format!(
                "{} {}",
                icon(Icon::Unchanged, SemanticColor::Dim),
                ColoredText::new(format!("Header already present in {}", path), SemanticColor::Dim)
                    .render(color)
            )),
            StampEvent::MissingHeader { path } => Line::Out(format!(
                "{} Missing license header: {}",
                icon(Icon::Missing, SemanticColor::Warning),
                path
            )),
            StampEvent::Error { message, .. } => Line::Err(format!(
                "{} {}",
                icon(Icon::Error, SemanticColor::Error),
                message
            )),
            StampEvent::Complete {
                modified,
                unchanged,
                missing,
                errors,
            } => {
                let summary = if self.check {
                    format!(
                        "Summary: {} missing, {} ok, {} errors",
                        missing, unchanged, errors
                    )
                } else {
                    format!(
                        "Summary: {} stamped, {} unchanged, {} errors",
                        modified, unchanged, errors
                    )
                };
                Line::Out(format!("\n{}", summary))
            }
        }
    }
}

use spdx_stamp::StampError;

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::text::{ColoredText, SemanticColor};
use crate::ui::theme::Icon;

pub fn format_error(err: &anyhow::Error, caps: TerminalCapabilities) -> String {
    let icon = ColoredText::new(Icon::Error.as_str(caps.supports_unicode), SemanticColor::Error)
        .render(caps.supports_color);
    let mut out = format!("{} Error: {}", icon, err);

    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {}", cause));
    }

    if let Some(hint) = err.downcast_ref::<StampError>().and_then(hint_for) {
        out.push_str(&format!("\n  {}", hint));
    }
    out
}

fn hint_for(err: &StampError) -> Option<&'static str> {
    match err {
        StampError::RootNotFound { .. } => Some("Pass an existing directory as ROOT."),
        StampError::InvalidExtension { .. } => Some("Use a suffix such as `go` or `.rs`."),
        StampError::InvalidHeader => Some("Pass a non-empty --header or --license."),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool, caps: TerminalCapabilities) {
    if json {
        let code = err
            .downcast_ref::<StampError>()
            .map(StampError::code)
            .unwrap_or("internal");
        let output = serde_json::json!({
            "event": "error",
            "code": code,
            "message": err.to_string(),
        });
        println!("{}", output);
        return;
    }

    eprintln!("{}", format_error(err, caps));
}

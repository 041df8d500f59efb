//! spdx-stamp CLI
//!
//! Usage: spdx-stamp [OPTIONS] [ROOT]
//!
//! Walks ROOT (default: current directory) and prepends the license header
//! to every matching file that does not already contain it.

mod cli;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use spdx_stamp::{Extension, Header, Mode, RunOptions};
use ui::output::EventPrinter;
use ui::terminal::detect_capabilities;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let caps = detect_capabilities(cli.no_color);
    match cmd_stamp(&cli, caps) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            ui::error::print_error(&err, cli.json, caps);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; the level comes from `-v` alone.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_options(cli: &Cli) -> Result<RunOptions> {
    let header = match &cli.header {
        Some(text) => Header::new(text.as_str())?,
        None => Header::spdx(&cli.license)?,
    };

    Ok(RunOptions {
        root: cli.root.clone(),
        extension: Extension::new(&cli.extension)?,
        header,
        mode: if cli.check { Mode::Check } else { Mode::Apply },
    })
}

/// Returns whether the run succeeded: no errors and, in check mode, no missing headers.
fn cmd_stamp(cli: &Cli, caps: ui::terminal::TerminalCapabilities) -> Result<bool> {
    let options = run_options(cli)?;
    log::debug!(
        "root={} ext={} mode={:?}",
        options.root.display(),
        options.extension,
        options.mode
    );

    let printer = EventPrinter::new(caps, cli.json, cli.check);
    let report = spdx_stamp::run(&options, |event| printer.print(event))?;

    Ok(report.is_success())
}

use std::path::PathBuf;

use clap::Parser;

/// spdx-stamp - prepend SPDX license headers to source files
#[derive(Parser, Debug)]
#[command(name = "spdx-stamp")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Files that already contain the header anywhere are left untouched.")]
pub struct Cli {
    /// Directory to walk
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// File extension to process (with or without the leading dot)
    #[arg(short, long = "ext", default_value = spdx_stamp::DEFAULT_EXTENSION)]
    pub extension: String,

    /// SPDX license identifier for the header
    #[arg(short, long, default_value = spdx_stamp::DEFAULT_LICENSE)]
    pub license: String,

    /// Literal header text (replaces the SPDX line)
    #[arg(long, conflicts_with = "license")]
    pub header: Option<String>,

    /// Report files missing the header without writing (exits non-zero if any)
    #[arg(long)]
    pub check: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `-l` / `--lines START[:END]`: link a line range instead of the file
//! - `--remote <NAME>`: use a specific remote instead of origin-else-first
//! - `-n` / `--print`: print the URL instead of opening the browser
//! - `--cwd <path>`: run as if in that directory
//! - `--debug`: enable debug output
//! - `--quiet` / `-q`: minimal output; implies `--print`

use std::path::PathBuf;

use clap::Parser;

use crate::resolve::LineRange;

/// Repolink - open a file in its repository's web interface
///
/// Derives a shareable web URL for a file tracked in a Git repository by
/// inspecting the repository's remote and HEAD, then opens it in the
/// default browser.
#[derive(Parser, Debug)]
#[command(name = "repolink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to link
    pub file: Option<PathBuf>,

    /// Line or line range to highlight, 1-based (e.g. "5" or "5:9")
    #[arg(short = 'l', long = "lines", value_name = "START[:END]", value_parser = parse_line_range)]
    pub lines: Option<LineRange>,

    /// Remote to link through (default: origin, else the first remote)
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Print the URL instead of opening the browser
    #[arg(short = 'n', long = "print")]
    pub print: bool,

    /// Run as if repolink was started in this directory
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Minimal output; implies --print
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Parse "START" or "START:END" into a validated [`LineRange`].
fn parse_line_range(raw: &str) -> Result<LineRange, String> {
    let (start, end) = match raw.split_once(':') {
        Some((start, end)) => (start, end),
        None => (raw, raw),
    };

    let start: u32 = start
        .parse()
        .map_err(|_| format!("invalid start line '{start}'"))?;
    let end: u32 = end.parse().map_err(|_| format!("invalid end line '{end}'"))?;

    LineRange::new(start, end)
        .ok_or_else(|| format!("invalid line range '{raw}': lines are 1-based and END >= START"))
}

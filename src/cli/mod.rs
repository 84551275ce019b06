//! cli
//!
//! Command-line interface layer for repolink.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Delegate to the link resolver
//! - Open the browser or print the URL
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`crate::link`] over a [`crate::host::LocalHost`]. All real logic lives
//! below this layer.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    commands::open::run(&cli, verbosity)
}

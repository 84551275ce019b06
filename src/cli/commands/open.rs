//! cli::commands::open
//!
//! Resolve the file's web URL and open it in the browser or print it.
//!
//! # Design
//!
//! The URL is opened in the browser only in an interactive setting:
//! `--print`, `--quiet`, a config `open = false`, or a non-TTY stdout all
//! print instead. When the browser fails to launch, the URL is printed as
//! a fallback so the invocation is never a dead end.
//!
//! # Example
//!
//! ```bash
//! # Open the file in the browser
//! repolink src/lib.rs
//!
//! # Link lines 5-9, print instead of opening
//! repolink src/lib.rs --lines 5:9 --print
//!
//! # Link through a specific remote
//! repolink src/lib.rs --remote upstream
//! ```

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::Cli;
use crate::core::config::Config;
use crate::host::LocalHost;
use crate::link::{resolve_link, LinkRequest};
use crate::ui::output::{self, Verbosity};

/// Run the open command.
pub fn run(cli: &Cli, verbosity: Verbosity) -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let Some(file) = &cli.file else {
        bail!("no file given");
    };
    let file = absolutize(file, cli.cwd.as_deref())?;
    output::debug(format!("linking {}", file.display()), verbosity);

    let start = file.parent().unwrap_or(&file);
    let host = LocalHost::discover(start)?;
    output::debug(format!("repository root {}", host.key()), verbosity);

    let request = LinkRequest {
        file,
        line_range: cli.lines,
        remote: cli.remote.clone().or(config.remote.clone()),
    };
    let url = resolve_link(&host, &request)?;

    if should_open(cli, &config) {
        if let Err(e) = ::open::that(&url) {
            // Fall back to printing
            output::warn(format!("could not open browser: {e}"), verbosity);
            println!("{url}");
        } else {
            output::print(&url, verbosity);
        }
    } else {
        println!("{url}");
    }

    Ok(())
}

/// Resolve the file argument to a canonical absolute path.
fn absolutize(file: &std::path::Path, cwd: Option<&std::path::Path>) -> Result<PathBuf> {
    let joined = match cwd {
        Some(cwd) if file.is_relative() => cwd.join(file),
        _ => file.to_path_buf(),
    };

    joined
        .canonicalize()
        .with_context(|| format!("cannot access {}", joined.display()))
}

/// Decide between opening the browser and printing.
fn should_open(cli: &Cli, config: &Config) -> bool {
    if cli.print || cli.quiet {
        return false;
    }
    if !config.open.unwrap_or(true) {
        return false;
    }

    // Piped output wants the URL, not a browser.
    std::io::stdout().is_terminal()
}

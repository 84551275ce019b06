//! Repolink - derive shareable web URLs for files in Git repositories
//!
//! Repolink is a single-binary tool that maps a file (or a selected line
//! range) tracked in a Git repository to the corresponding `blob/` URL on
//! the repository's hosting site, and opens it in the default browser.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to link)
//! - [`link`] - Orchestrates repository lookup, remote selection, and URL
//!   construction over an injected host
//! - [`resolve`] - Pure remote-URL parsing and web-URL construction
//! - [`host`] - Abstraction over the Git integration supplying repositories,
//!   remotes, and HEAD state
//! - [`git`] - Single interface for all Git operations
//! - [`core`] - Configuration
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. [`resolve`] is pure: no I/O, no dependency on any other module
//! 2. Malformed remote URLs never panic; parse failure surfaces as `None`
//! 3. A file outside the repository root is refused before any URL is built

pub mod cli;
pub mod core;
pub mod git;
pub mod host;
pub mod link;
pub mod resolve;
pub mod ui;

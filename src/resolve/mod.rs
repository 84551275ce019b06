//! resolve
//!
//! Pure remote-URL parsing and web-URL construction.
//!
//! # Design
//!
//! This module is the only part of repolink with any real logic, and it is
//! deliberately free of I/O: every function maps in-memory strings to
//! in-memory strings. The [`crate::link`] layer wires it to a live
//! repository.
//!
//! # Responsibilities
//!
//! - Parse a Git remote URL into host/owner/repo ([`parse_remote`])
//! - Build a `blob/` web URL for a file and optional line range
//!   ([`build_file_url`])
//! - Compute containment-checked repo-relative paths ([`repo_relative`])
//!
//! # Invariants
//!
//! - [`parse_remote`] never panics; unrecognized shapes return `None`
//! - [`build_file_url`] is total over well-formed input
//! - Encoded path segments never contain an encoded slash; slashes are
//!   preserved as structural delimiters

mod path;
mod remote;
mod url;

pub use path::repo_relative;
pub use remote::{parse_remote, RemoteDescriptor};
pub use url::{build_file_url, FileReference, LineRange};

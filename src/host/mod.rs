//! host
//!
//! Abstraction over the Git integration that supplies repositories,
//! remotes, and HEAD state.
//!
//! # Architecture
//!
//! The [`GitHost`] trait is the seam between the link layer and any
//! concrete Git machinery. The [`crate::link`] resolver depends only on
//! this trait, never on git2 directly.
//!
//! # Modules
//!
//! - `traits`: Core `GitHost` trait and its repository/remote/head types
//! - `local`: git2-backed implementation for the local working copy
//! - [`mock`]: In-memory implementation for deterministic testing

mod local;
pub mod mock;
mod traits;

pub use local::LocalHost;
pub use traits::{select_remote, GitHost, Head, HostError, Remote, RepoKey};

//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the only doorway to Git. All repository reads flow
//! through this interface, which normalizes git2 errors into typed failure
//! categories. No other module should import `git2`.
//!
//! Repolink only ever reads: repository discovery, the working-directory
//! root, the current branch or HEAD commit, and the remote list. There are
//! no mutations.

mod interface;

pub use interface::{Git, GitError, RemoteInfo};

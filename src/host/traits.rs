//! host::traits
//!
//! GitHost trait definition for querying repository state.
//!
//! # Design
//!
//! The trait is synchronous: unlike a remote forge API, the host only
//! reads local repository state, so there is no network I/O to await.
//! All methods return `Result` so concrete hosts can surface Git failures
//! without panicking.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::GitError;

/// Errors from host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host does not know the given repository.
    #[error("unknown repository: {root}")]
    UnknownRepository {
        /// The root that was requested
        root: PathBuf,
    },

    /// Underlying Git failure.
    #[error(transparent)]
    Git(#[from] GitError),
}

/// Identifies a repository known to a host.
///
/// The key is the repository's working-directory root, which is also what
/// repo-relative paths are computed against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoKey(PathBuf);

impl RepoKey {
    /// Create a key from a working-directory root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    /// The repository's working-directory root.
    pub fn root(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for RepoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A named remote with its fetch URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name (e.g. "origin")
    pub name: String,
    /// Fetch URL, absent for misconfigured remotes
    pub fetch_url: Option<String>,
}

/// HEAD state of a repository.
///
/// `branch` is preferred over `commit` when pinning a ref; a head with
/// neither means no ref is available (unborn HEAD).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    /// Current branch name, absent when detached or unborn
    pub branch: Option<String>,
    /// HEAD commit id, absent when unborn
    pub commit: Option<String>,
}

impl Head {
    /// The ref to pin a URL to: the branch name, else the commit id.
    pub fn git_ref(&self) -> Option<&str> {
        self.branch.as_deref().or(self.commit.as_deref())
    }
}

/// Query interface over a Git integration.
///
/// # Example
///
/// ```
/// use repolink::host::{GitHost, HostError};
///
/// fn first_remote(host: &dyn GitHost) -> Result<Option<String>, HostError> {
///     let repos = host.list_repositories()?;
///     match repos.first() {
///         Some(repo) => Ok(host.remotes_of(repo)?.into_iter().next().map(|r| r.name)),
///         None => Ok(None),
///     }
/// }
/// ```
pub trait GitHost {
    /// List the repositories this host knows about.
    ///
    /// Order is host-defined; callers that pick "the" repository when
    /// several exist must locate one by root instead of relying on order.
    fn list_repositories(&self) -> Result<Vec<RepoKey>, HostError>;

    /// List the remotes of a repository, in the host-reported order.
    fn remotes_of(&self, repo: &RepoKey) -> Result<Vec<Remote>, HostError>;

    /// The HEAD state of a repository.
    fn head_of(&self, repo: &RepoKey) -> Result<Head, HostError>;
}

/// Select the remote to link through: prefer `origin`, else the first in
/// the host-reported list.
///
/// The fallback is order-dependent; if the host does not guarantee remote
/// ordering, the choice between non-origin remotes is not deterministic.
pub fn select_remote(remotes: &[Remote]) -> Option<&Remote> {
    remotes
        .iter()
        .find(|r| r.name == "origin")
        .or_else(|| remotes.first())
}

//! git::interface
//!
//! Git interface implementation using git2.
//!
//! # Design
//!
//! The `Git` struct is the only way to interact with a Git repository.
//! It exposes the read-only subset repolink needs: discovery, the working
//! directory, HEAD state, and remotes. Errors are normalized into typed
//! [`GitError`] variants so higher layers can handle them distinctly.
//!
//! # Example
//!
//! ```ignore
//! use repolink::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! if let Some(branch) = git.current_branch()? {
//!     println!("on {branch}");
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// A configured remote: its name and fetch URL, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// Remote name (e.g. "origin")
    pub name: String,
    /// Fetch URL, absent for misconfigured remotes
    pub fetch_url: Option<String>,
}

/// The Git interface.
///
/// Read-only: repolink never mutates the repository it links into.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory (or file's parent) within the
    /// repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Path to the working directory root.
    pub fn work_dir(&self) -> Result<PathBuf, GitError> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or(GitError::BareRepo)
    }

    /// Get the current branch name, if on a branch.
    ///
    /// Returns `None` if HEAD is detached or unborn.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            if let Some(name) = head.shorthand() {
                return Ok(Some(name.to_string()));
            }
        }

        Ok(None) // Detached HEAD
    }

    /// Get the HEAD commit id, if HEAD resolves to a commit.
    ///
    /// Returns `None` for an unborn HEAD (fresh repository with no
    /// commits).
    pub fn head_commit(&self) -> Result<Option<String>, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let commit = head.peel_to_commit()?;
        Ok(Some(commit.id().to_string()))
    }

    /// List all configured remotes, in the order git2 reports them.
    ///
    /// Remotes with non-UTF8 names are skipped.
    pub fn list_remotes(&self) -> Result<Vec<RemoteInfo>, GitError> {
        let names = self.repo.remotes()?;

        let mut remotes = Vec::new();
        for name in names.iter().flatten() {
            let remote = self.repo.find_remote(name)?;
            remotes.push(RemoteInfo {
                name: name.to_string(),
                fetch_url: remote.url().map(String::from),
            });
        }

        Ok(remotes)
    }
}

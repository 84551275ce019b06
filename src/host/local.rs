//! host::local
//!
//! git2-backed host for the local working copy.
//!
//! # Design
//!
//! A `LocalHost` is discovered from a starting path (typically the target
//! file's directory) and knows exactly one repository. The root is
//! canonicalized at discovery so containment checks against canonicalized
//! file paths compare like with like.

use std::path::Path;

use crate::git::Git;

use super::traits::{GitHost, Head, HostError, Remote, RepoKey};

/// Host over the single repository enclosing a path.
#[derive(Debug)]
pub struct LocalHost {
    git: Git,
    key: RepoKey,
}

impl LocalHost {
    /// Discover the repository enclosing `path`.
    ///
    /// # Errors
    ///
    /// - [`crate::git::GitError::NotARepo`] if no repository encloses the path
    /// - [`crate::git::GitError::BareRepo`] for bare repositories
    pub fn discover(path: &Path) -> Result<Self, HostError> {
        let git = Git::open(path)?;
        let work_dir = git.work_dir()?;
        // Symlinked temp dirs (macOS /tmp) otherwise defeat the prefix check.
        let root = work_dir.canonicalize().unwrap_or(work_dir);

        Ok(Self {
            git,
            key: RepoKey::new(root),
        })
    }

    /// The key of the discovered repository.
    pub fn key(&self) -> &RepoKey {
        &self.key
    }

    fn check_key(&self, repo: &RepoKey) -> Result<(), HostError> {
        if repo == &self.key {
            Ok(())
        } else {
            Err(HostError::UnknownRepository {
                root: repo.root().to_path_buf(),
            })
        }
    }
}

impl GitHost for LocalHost {
    fn list_repositories(&self) -> Result<Vec<RepoKey>, HostError> {
        Ok(vec![self.key.clone()])
    }

    fn remotes_of(&self, repo: &RepoKey) -> Result<Vec<Remote>, HostError> {
        self.check_key(repo)?;

        let remotes = self
            .git
            .list_remotes()?
            .into_iter()
            .map(|r| Remote {
                name: r.name,
                fetch_url: r.fetch_url,
            })
            .collect();

        Ok(remotes)
    }

    fn head_of(&self, repo: &RepoKey) -> Result<Head, HostError> {
        self.check_key(repo)?;

        Ok(Head {
            branch: self.git.current_branch()?,
            commit: self.git.head_commit()?,
        })
    }
}

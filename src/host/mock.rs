//! host::mock
//!
//! Mock host implementation for deterministic testing.
//!
//! # Design
//!
//! The mock host holds repositories in memory and answers queries without
//! touching a filesystem or git2. Tests configure it with the exact
//! remotes and HEAD state a scenario needs.
//!
//! # Example
//!
//! ```
//! use repolink::host::mock::MockHost;
//! use repolink::host::{GitHost, Head, Remote};
//!
//! let host = MockHost::new().with_repository(
//!     "/repo",
//!     vec![Remote {
//!         name: "origin".to_string(),
//!         fetch_url: Some("git@github.com:acme/widgets.git".to_string()),
//!     }],
//!     Head {
//!         branch: Some("main".to_string()),
//!         commit: None,
//!     },
//! );
//!
//! let repos = host.list_repositories().unwrap();
//! assert_eq!(repos.len(), 1);
//! assert_eq!(host.remotes_of(&repos[0]).unwrap()[0].name, "origin");
//! ```

use std::path::PathBuf;

use super::traits::{GitHost, Head, HostError, Remote, RepoKey};

/// In-memory host for testing.
#[derive(Debug, Default)]
pub struct MockHost {
    repos: Vec<MockRepo>,
}

#[derive(Debug)]
struct MockRepo {
    key: RepoKey,
    remotes: Vec<Remote>,
    head: Head,
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository with the given root, remotes, and HEAD state.
    pub fn with_repository(
        mut self,
        root: impl Into<PathBuf>,
        remotes: Vec<Remote>,
        head: Head,
    ) -> Self {
        self.repos.push(MockRepo {
            key: RepoKey::new(root),
            remotes,
            head,
        });
        self
    }

    fn find(&self, repo: &RepoKey) -> Result<&MockRepo, HostError> {
        self.repos
            .iter()
            .find(|r| &r.key == repo)
            .ok_or_else(|| HostError::UnknownRepository {
                root: repo.root().to_path_buf(),
            })
    }
}

impl GitHost for MockHost {
    fn list_repositories(&self) -> Result<Vec<RepoKey>, HostError> {
        Ok(self.repos.iter().map(|r| r.key.clone()).collect())
    }

    fn remotes_of(&self, repo: &RepoKey) -> Result<Vec<Remote>, HostError> {
        Ok(self.find(repo)?.remotes.clone())
    }

    fn head_of(&self, repo: &RepoKey) -> Result<Head, HostError> {
        Ok(self.find(repo)?.head.clone())
    }
}

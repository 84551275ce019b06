//! link
//!
//! Orchestrates a single link resolution over an injected host.
//!
//! # Design
//!
//! [`resolve_link`] walks the whole pipeline: find the repository
//! containing the file, select a remote, parse its URL, compute the
//! containment-checked repo-relative path, pick the ref, and build the
//! final URL. Each failure mode is a distinct [`LinkError`] variant so the
//! CLI can show a descriptive message; nothing here panics on bad input.
//!
//! # Repository lookup
//!
//! The file's repository is the listed repository whose root contains the
//! file. When no root matches but the host knows exactly one repository,
//! that one is used (the path-containment check still refuses files
//! outside it).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::host::{select_remote, GitHost, HostError, RepoKey};
use crate::resolve::{build_file_url, parse_remote, repo_relative, FileReference, LineRange};

/// Errors from link resolution.
///
/// All variants are user-facing conditions; the caller renders them as
/// messages and declines to open anything.
#[derive(Debug, Error)]
pub enum LinkError {
    /// No repository contains the file.
    #[error("no git repository found for {}", path.display())]
    NoRepository {
        /// The file that was being linked
        path: PathBuf,
    },

    /// The repository has no remote with a fetch URL.
    #[error("no git remote URL found (e.g. origin)")]
    NoRemote,

    /// A remote was requested by name but does not exist.
    #[error("no remote named '{name}'")]
    RemoteNotFound {
        /// The requested remote name
        name: String,
    },

    /// The remote URL has no recognizable host/owner/repo shape.
    #[error("unsupported or unrecognized remote URL: {url}")]
    UnrecognizedRemoteFormat {
        /// The offending fetch URL
        url: String,
    },

    /// Neither a branch name nor a commit id is available.
    #[error("could not determine current branch or commit")]
    MissingRef,

    /// The file is not inside the repository root.
    #[error("file is not inside the repository root: {}", path.display())]
    PathOutsideRepository {
        /// The offending file
        path: PathBuf,
    },

    /// Host failure while reading repository state.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// What to build a link for.
#[derive(Debug, Clone)]
pub struct LinkRequest {
    /// Absolute path of the file to link
    pub file: PathBuf,
    /// Selected lines, if any
    pub line_range: Option<LineRange>,
    /// Remote to use instead of the origin-else-first default
    pub remote: Option<String>,
}

impl LinkRequest {
    /// A request for a whole file with default remote selection.
    pub fn for_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line_range: None,
            remote: None,
        }
    }
}

/// Resolve a request to a shareable web URL.
///
/// # Example
///
/// ```
/// use repolink::host::mock::MockHost;
/// use repolink::host::{Head, Remote};
/// use repolink::link::{resolve_link, LinkRequest};
///
/// let host = MockHost::new().with_repository(
///     "/repo",
///     vec![Remote {
///         name: "origin".to_string(),
///         fetch_url: Some("git@github.com:acme/widgets.git".to_string()),
///     }],
///     Head {
///         branch: Some("main".to_string()),
///         commit: None,
///     },
/// );
///
/// let url = resolve_link(&host, &LinkRequest::for_file("/repo/src/lib.rs")).unwrap();
/// assert_eq!(url, "https://github.com/acme/widgets/blob/main/src/lib.rs");
/// ```
pub fn resolve_link(host: &dyn GitHost, request: &LinkRequest) -> Result<String, LinkError> {
    let repo = find_repository(host, &request.file)?;

    let remotes = host.remotes_of(&repo)?;
    let remote = match &request.remote {
        Some(name) => remotes
            .iter()
            .find(|r| &r.name == name)
            .ok_or_else(|| LinkError::RemoteNotFound { name: name.clone() })?,
        None => select_remote(&remotes).ok_or(LinkError::NoRemote)?,
    };
    let fetch_url = remote.fetch_url.as_deref().ok_or(LinkError::NoRemote)?;

    let descriptor =
        parse_remote(fetch_url).ok_or_else(|| LinkError::UnrecognizedRemoteFormat {
            url: fetch_url.to_string(),
        })?;

    let head = host.head_of(&repo)?;
    let git_ref = head.git_ref().ok_or(LinkError::MissingRef)?;

    let repo_relative_path = repo_relative(repo.root(), &request.file).ok_or_else(|| {
        LinkError::PathOutsideRepository {
            path: request.file.clone(),
        }
    })?;

    Ok(build_file_url(
        &descriptor,
        &FileReference {
            repo_relative_path,
            git_ref: git_ref.to_string(),
            line_range: request.line_range,
        },
    ))
}

/// Find the repository whose root contains `file`.
///
/// Falls back to the sole known repository when no root matches and
/// exactly one exists.
fn find_repository(host: &dyn GitHost, file: &Path) -> Result<RepoKey, LinkError> {
    let mut repos = host.list_repositories()?;

    if let Some(found) = repos.iter().find(|r| file.starts_with(r.root())) {
        return Ok(found.clone());
    }

    if repos.len() == 1 {
        return Ok(repos.remove(0));
    }

    Err(LinkError::NoRepository {
        path: file.to_path_buf(),
    })
}

//! resolve::remote
//!
//! Remote URL parsing.
//!
//! # Supported shapes
//!
//! - SCP-like syntax: `git@github.com:owner/repo(.git)` (no scheme)
//! - URI syntax: `https://github.com/owner/repo(.git)`,
//!   `http://...`, `ssh://git@host/owner/repo(.git)`, with a leading
//!   `git+` scheme prefix stripped first
//!
//! Anything else fails to parse. Parse failure is the only error channel:
//! the functions here never panic and never return a partial descriptor.

use url::Url;

/// The host/owner/repo triple derived from a remote URL.
///
/// `repo` never carries a trailing `.git` suffix, and all three fields are
/// non-empty. `host` never contains `@` or `:`.
///
/// For SCP-like remotes with nested groups (`git@host:group/sub/repo`),
/// every segment after the owner stays in `repo`. URI-shaped remotes keep
/// only the first two path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    /// Hostname of the hosting site (e.g. "github.com")
    pub host: String,
    /// Owner or organization segment
    pub owner: String,
    /// Repository segment(s), `.git` suffix stripped
    pub repo: String,
}

/// Parse a Git remote URL into a [`RemoteDescriptor`].
///
/// Returns `None` for any shape that is not a recognizable browsable
/// remote. The caller must surface this as an "unsupported remote"
/// condition, not a crash.
///
/// # Example
///
/// ```
/// use repolink::resolve::parse_remote;
///
/// let d = parse_remote("git@github.com:acme/widgets.git").unwrap();
/// assert_eq!(d.host, "github.com");
/// assert_eq!(d.owner, "acme");
/// assert_eq!(d.repo, "widgets");
///
/// assert!(parse_remote("not a url").is_none());
/// ```
pub fn parse_remote(remote_url: &str) -> Option<RemoteDescriptor> {
    // SCP-like syntax only applies when no scheme is present.
    if !remote_url.contains("://") {
        if let Some(descriptor) = parse_scp_like(remote_url) {
            return Some(descriptor);
        }
    }

    parse_uri(remote_url)
}

/// Parse SCP-like syntax: `user@host:owner/rest`.
///
/// `user` contains no `@`, `host` contains no `:`, and `rest` is everything
/// after the first `/` following the owner. All of `rest` stays in `repo`.
fn parse_scp_like(remote_url: &str) -> Option<RemoteDescriptor> {
    let (user, after_user) = remote_url.split_once('@')?;
    let (host, path) = after_user.split_once(':')?;
    let (owner, rest) = path.split_once('/')?;

    if user.is_empty() || host.is_empty() || owner.is_empty() || rest.is_empty() {
        return None;
    }

    // Splitting at the first ':' guarantees host has none; reject a stray
    // '@' that would have belonged to the authority.
    if host.contains('@') {
        return None;
    }

    make_descriptor(host, owner, rest)
}

/// Parse URI syntax: `scheme://host/owner/repo[/ignored...]`.
///
/// A leading `git+` is stripped before parsing (`git+ssh://` behaves as
/// `ssh://`). Path segments past the second are ignored.
fn parse_uri(remote_url: &str) -> Option<RemoteDescriptor> {
    let normalized = remote_url.strip_prefix("git+").unwrap_or(remote_url);
    let url = Url::parse(normalized).ok()?;
    let host = url.host_str()?;

    let mut segments = url.path().trim_start_matches('/').split('/');
    let owner = segments.next()?;
    let repo = segments.next()?;

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    make_descriptor(host, owner, repo)
}

/// Assemble a descriptor, stripping a single trailing `.git` from the repo
/// segment. Rejects a repo that is nothing but the suffix.
fn make_descriptor(host: &str, owner: &str, repo: &str) -> Option<RemoteDescriptor> {
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if host.is_empty() || repo.is_empty() {
        return None;
    }

    Some(RemoteDescriptor {
        host: host.to_string(),
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

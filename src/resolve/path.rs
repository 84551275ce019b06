//! resolve::path
//!
//! Repo-relative path computation with a containment check.
//!
//! A file can only be linked if it sits inside the repository root. The
//! relative path is rejected when it is empty (the root itself) or when it
//! escapes through a parent-directory segment.

use std::path::{Component, Path};

/// Compute the repository-relative path of `file` under `root`.
///
/// Returns the path joined with `/` regardless of platform, or `None`
/// when the file is not inside the repository (or is the root itself).
/// Callers must treat `None` as a refusal, never as an empty path.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use repolink::resolve::repo_relative;
///
/// let root = Path::new("/repo");
/// assert_eq!(
///     repo_relative(root, Path::new("/repo/src/a.rs")),
///     Some("src/a.rs".to_string())
/// );
/// assert_eq!(repo_relative(root, Path::new("/other/a.rs")), None);
/// ```
pub fn repo_relative(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            // Any traversal or re-anchoring escapes the root.
            _ => return None,
        }
    }

    if segments.is_empty() {
        return None;
    }

    Some(segments.join("/"))
}

//! resolve::url
//!
//! Web URL construction for a file at a ref.
//!
//! # Design
//!
//! `https://{host}/{owner}/{repo}/blob/{ref}/{path}` with the ref encoded
//! as a single path segment (a `/` in a branch name becomes `%2F`) and the
//! path encoded per segment so its slashes survive as delimiters. A line
//! range becomes a `#L5` / `#L5-L9` fragment.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::RemoteDescriptor;

/// Characters escaped inside a single URL path segment.
///
/// Everything non-alphanumeric except the characters browsers (and the
/// hosting sites) leave literal in paths: `-`, `_`, `.`, `!`, `~`, `*`,
/// `'`, `(`, `)`. Notably `/` is escaped, which is what keeps an encoded
/// ref a single segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    /// Create a validated line range.
    ///
    /// Returns `None` unless `1 <= start <= end`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        if start >= 1 && end >= start {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// A single-line range.
    pub fn single(line: u32) -> Option<Self> {
        Self::new(line, line)
    }

    /// First line of the range (1-based).
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last line of the range (1-based, inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// The URL fragment for this range: `#L5` or `#L5-L9`.
    pub fn fragment(&self) -> String {
        if self.start == self.end {
            format!("#L{}", self.start)
        } else {
            format!("#L{}-L{}", self.start, self.end)
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

/// A file pinned to a ref, ready for URL construction.
///
/// `repo_relative_path` is POSIX-separated (see
/// [`repo_relative`](super::repo_relative)); `git_ref` is the raw branch
/// name or commit id, not yet encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    /// Path relative to the repository root, `/`-separated, unencoded
    pub repo_relative_path: String,
    /// Branch name or commit id, unencoded
    pub git_ref: String,
    /// Selected lines, if any
    pub line_range: Option<LineRange>,
}

/// Build the web URL for a file at a ref.
///
/// Pure string construction; never fails given a descriptor produced by
/// [`parse_remote`](super::parse_remote). Supplying an empty host, owner,
/// or repo is a caller precondition violation.
///
/// # Example
///
/// ```
/// use repolink::resolve::{build_file_url, FileReference, LineRange, RemoteDescriptor};
///
/// let descriptor = RemoteDescriptor {
///     host: "github.com".to_string(),
///     owner: "acme".to_string(),
///     repo: "widgets".to_string(),
/// };
/// let file = FileReference {
///     repo_relative_path: "src/lib.rs".to_string(),
///     git_ref: "main".to_string(),
///     line_range: LineRange::new(5, 9),
/// };
/// assert_eq!(
///     build_file_url(&descriptor, &file),
///     "https://github.com/acme/widgets/blob/main/src/lib.rs#L5-L9"
/// );
/// ```
pub fn build_file_url(descriptor: &RemoteDescriptor, file: &FileReference) -> String {
    let mut url = format!(
        "https://{}/{}/{}/blob/{}/{}",
        descriptor.host,
        descriptor.owner,
        descriptor.repo,
        encode_segment(&file.git_ref),
        encode_path(&file.repo_relative_path),
    );

    if let Some(range) = &file.line_range {
        url.push_str(&range.fragment());
    }

    url
}

/// Percent-encode a string as a single path segment (`/` becomes `%2F`).
fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

/// Percent-encode a `/`-separated path, segment by segment.
///
/// Slashes are preserved as structural delimiters; encoded segments never
/// themselves contain an encoded slash.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

//! Integration tests for the Git interface and the local host.
//!
//! These tests use real git repositories created via tempfile to verify
//! that link resolution works against actual git state.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use repolink::git::{Git, GitError};
use repolink::host::{GitHost, LocalHost};
use repolink::link::{resolve_link, LinkError, LinkRequest};
use repolink::resolve::LineRange;

/// Test fixture that creates a real git repository.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit on `main`.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);
        run_git(dir.path(), &["branch", "-M", "main"]);

        Self { dir }
    }

    /// Get the path to the repository.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a remote to the repository.
    fn add_remote(&self, name: &str, url: &str) {
        run_git(self.path(), &["remote", "add", name, url]);
    }

    /// Create a file (and any parent directories) and commit it.
    fn commit_file(&self, path: &str, content: &str) -> PathBuf {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "-m", &format!("Add {path}")]);
        full.canonicalize().unwrap()
    }

    /// Detach HEAD at the current commit and return its id.
    fn detach_head(&self) -> String {
        let oid = self.rev_parse_head();
        run_git(self.path(), &["checkout", "--detach", &oid]);
        oid
    }

    /// Get HEAD's commit id using git directly.
    fn rev_parse_head(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Open a Git interface to this repository.
    fn git(&self) -> Git {
        Git::open(self.path()).expect("failed to open test repo")
    }

    /// Discover a local host for this repository.
    fn host(&self) -> LocalHost {
        LocalHost::discover(self.path()).expect("failed to discover test repo")
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

mod git_interface {
    use super::*;

    #[test]
    fn current_branch_on_main() {
        let repo = TestRepo::new();
        assert_eq!(repo.git().current_branch().unwrap().as_deref(), Some("main"));
    }

    #[test]
    fn current_branch_none_when_detached() {
        let repo = TestRepo::new();
        repo.detach_head();
        assert_eq!(repo.git().current_branch().unwrap(), None);
    }

    #[test]
    fn head_commit_matches_git() {
        let repo = TestRepo::new();
        assert_eq!(
            repo.git().head_commit().unwrap().unwrap(),
            repo.rev_parse_head()
        );
    }

    #[test]
    fn list_remotes_in_order() {
        let repo = TestRepo::new();
        repo.add_remote("upstream", "git@github.com:acme/widgets.git");
        repo.add_remote("origin", "git@github.com:fork/widgets.git");

        let remotes = repo.git().list_remotes().unwrap();
        let names: Vec<_> = remotes.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"origin"));
        assert!(names.contains(&"upstream"));
        assert_eq!(
            remotes
                .iter()
                .find(|r| r.name == "origin")
                .and_then(|r| r.fetch_url.as_deref()),
            Some("git@github.com:fork/widgets.git")
        );
    }

    #[test]
    fn no_remotes_is_empty_list() {
        let repo = TestRepo::new();
        assert!(repo.git().list_remotes().unwrap().is_empty());
    }

    #[test]
    fn open_from_subdirectory() {
        let repo = TestRepo::new();
        repo.commit_file("src/lib.rs", "pub fn f() {}\n");
        let git = Git::open(&repo.path().join("src")).unwrap();
        assert_eq!(git.current_branch().unwrap().as_deref(), Some("main"));
    }

    #[test]
    fn open_outside_any_repo_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Git::open(dir.path()),
            Err(GitError::NotARepo { .. })
        ));
    }
}

mod local_host {
    use super::*;

    #[test]
    fn lists_exactly_one_repository() {
        let repo = TestRepo::new();
        let host = repo.host();
        let repos = host.list_repositories().unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].root(), repo.path().canonicalize().unwrap());
    }

    #[test]
    fn head_of_reports_branch_and_commit() {
        let repo = TestRepo::new();
        let host = repo.host();
        let head = host.head_of(host.key()).unwrap();
        assert_eq!(head.branch.as_deref(), Some("main"));
        assert_eq!(head.commit.unwrap(), repo.rev_parse_head());
    }
}

mod end_to_end {
    use super::*;

    #[test]
    fn file_on_branch() {
        let repo = TestRepo::new();
        repo.add_remote("origin", "git@github.com:acme/widgets.git");
        let file = repo.commit_file("src/lib.rs", "pub fn f() {}\n");

        let url = resolve_link(&repo.host(), &LinkRequest::for_file(file)).unwrap();
        assert_eq!(url, "https://github.com/acme/widgets/blob/main/src/lib.rs");
    }

    #[test]
    fn line_range_fragment() {
        let repo = TestRepo::new();
        repo.add_remote("origin", "https://github.com/acme/widgets.git");
        let file = repo.commit_file("src/lib.rs", "a\nb\nc\nd\ne\nf\ng\nh\ni\nj\n");

        let request = LinkRequest {
            file,
            line_range: LineRange::new(5, 9),
            remote: None,
        };
        let url = resolve_link(&repo.host(), &request).unwrap();
        assert_eq!(
            url,
            "https://github.com/acme/widgets/blob/main/src/lib.rs#L5-L9"
        );
    }

    #[test]
    fn detached_head_links_to_commit() {
        let repo = TestRepo::new();
        repo.add_remote("origin", "git@github.com:acme/widgets.git");
        let file = repo.commit_file("a.rs", "fn a() {}\n");
        let oid = repo.detach_head();

        let url = resolve_link(&repo.host(), &LinkRequest::for_file(file)).unwrap();
        assert_eq!(url, format!("https://github.com/acme/widgets/blob/{oid}/a.rs"));
    }

    #[test]
    fn origin_preferred_over_other_remotes() {
        let repo = TestRepo::new();
        repo.add_remote("upstream", "git@github.com:acme/widgets.git");
        repo.add_remote("origin", "git@github.com:fork/widgets.git");
        let file = repo.commit_file("a.rs", "fn a() {}\n");

        let url = resolve_link(&repo.host(), &LinkRequest::for_file(file)).unwrap();
        assert_eq!(url, "https://github.com/fork/widgets/blob/main/a.rs");
    }

    #[test]
    fn remote_override() {
        let repo = TestRepo::new();
        repo.add_remote("upstream", "git@github.com:acme/widgets.git");
        repo.add_remote("origin", "git@github.com:fork/widgets.git");
        let file = repo.commit_file("a.rs", "fn a() {}\n");

        let request = LinkRequest {
            file,
            line_range: None,
            remote: Some("upstream".to_string()),
        };
        let url = resolve_link(&repo.host(), &request).unwrap();
        assert_eq!(url, "https://github.com/acme/widgets/blob/main/a.rs");
    }

    #[test]
    fn file_outside_repository_refused() {
        let repo = TestRepo::new();
        repo.add_remote("origin", "git@github.com:acme/widgets.git");
        let outside = TempDir::new().unwrap();
        let file = outside.path().join("a.rs");
        std::fs::write(&file, "fn a() {}\n").unwrap();

        let err = resolve_link(
            &repo.host(),
            &LinkRequest::for_file(file.canonicalize().unwrap()),
        )
        .unwrap_err();
        assert!(matches!(err, LinkError::PathOutsideRepository { .. }));
    }

    #[test]
    fn no_remote_refused() {
        let repo = TestRepo::new();
        let file = repo.commit_file("a.rs", "fn a() {}\n");

        let err = resolve_link(&repo.host(), &LinkRequest::for_file(file)).unwrap_err();
        assert!(matches!(err, LinkError::NoRemote));
    }

    #[test]
    fn unrecognized_remote_refused() {
        let repo = TestRepo::new();
        repo.add_remote("origin", "/srv/git/widgets.git");
        let file = repo.commit_file("a.rs", "fn a() {}\n");

        let err = resolve_link(&repo.host(), &LinkRequest::for_file(file)).unwrap_err();
        assert!(matches!(err, LinkError::UnrecognizedRemoteFormat { .. }));
    }

    #[test]
    fn path_with_spaces_is_encoded() {
        let repo = TestRepo::new();
        repo.add_remote("origin", "git@github.com:acme/widgets.git");
        let file = repo.commit_file("docs/release notes.md", "notes\n");

        let url = resolve_link(&repo.host(), &LinkRequest::for_file(file)).unwrap();
        assert_eq!(
            url,
            "https://github.com/acme/widgets/blob/main/docs/release%20notes.md"
        );
    }
}

//! Real git repository fixtures built with the `git` CLI.
//!
//! Every fixture produces a genuine repository so tests exercise the same
//! `git` binary the server shells out to. All helpers panic on failure;
//! a broken fixture is a test bug, not a condition to handle.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Runs a git command in `path`, panicking with stderr on failure.
///
/// # Panics
/// Panics if git cannot be spawned or exits non-zero.
pub fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("git fixture: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "git fixture: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Initialises an empty repository on a `main` branch with a test identity.
///
/// Specifically:
/// - Runs `git init -b main` (falling back to `init` + rename for old git)
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
///
/// # Panics
/// Panics if any git operation fails.
pub fn init_repo(path: &Path) {
    let init = Command::new("git")
        .args(["init", "-b", "main"])
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("git fixture: failed to run git init: {e}"));
    if !init.status.success() {
        // Older git may not support -b; fall back to plain init + rename
        git(path, &["init"]);
        let _ = Command::new("git")
            .args(["branch", "-m", "main"])
            .current_dir(path)
            .output();
    }

    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Writes `content` to `file` (creating parent directories) and commits it
/// with `message`.
///
/// # Panics
/// Panics if the filesystem write or any git operation fails.
pub fn commit_file(path: &Path, file: &str, content: &str, message: &str) {
    let full = path.join(file);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("git fixture: failed to create {}: {e}", parent.display()));
    }
    fs::write(&full, content)
        .unwrap_or_else(|e| panic!("git fixture: failed to write {file}: {e}"));
    git(path, &["add", "."]);
    git(path, &["commit", "-m", message]);
}

/// Initialises a repository on `main` with one commit per `(file, content,
/// message)` entry.
///
/// Use for: tests that need a specific sequence of commits and files.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_commits(path: &Path, commits: &[(&str, &str, &str)]) {
    init_repo(path);
    for (file, content, message) in commits {
        commit_file(path, file, content, message);
    }
}

/// Initialises a repository on `main` with `count` numbered commits, each
/// rewriting `log.txt`.
///
/// Use for: tests that care about history length (log limits, truncation).
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_history(path: &Path, count: usize) {
    init_repo(path);
    for i in 0..count {
        commit_file(path, "log.txt", &format!("entry {i}\n"), &format!("Commit {i}"));
    }
}

/// Initialises a repository with one commit on `main`, then checks out a
/// `feature` branch carrying two more commits.
///
/// Use for: tests that diff a working branch against `main`.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_feature_branch(path: &Path) {
    repo_with_commits(path, &[("README.md", "# Demo project\n", "Initial commit")]);
    git(path, &["checkout", "-b", "feature"]);
    commit_file(
        path,
        "src/lib.rs",
        "pub fn answer() -> u32 {\n    42\n}\n",
        "Add answer function",
    );
    commit_file(
        path,
        "src/lib.rs",
        "pub fn answer() -> u32 {\n    41 + 1\n}\n",
        "Rework answer arithmetic",
    );
}

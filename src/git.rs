//! Version-control abstraction for the sync and memorize workflows.
//!
//! The journal directory doubles as a git repository. This module wraps the
//! handful of git invocations the application needs behind a capability
//! trait so the workflows can be exercised with a test double.

use crate::errors::{AppResult, GitError};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Trait defining the git operations the journal workflows rely on.
pub trait GitRunner {
    /// `git pull` in the journal root.
    fn pull(&self, root: &Path) -> AppResult<()>;

    /// `git add .` in the journal root.
    fn stage_all(&self, root: &Path) -> AppResult<()>;

    /// `git commit -am <message>` in the journal root.
    fn commit_all(&self, root: &Path, message: &str) -> AppResult<()>;

    /// `git push <remote> <branch>` from the journal root.
    fn push(&self, root: &Path, remote: &str, branch: &str) -> AppResult<()>;
}

/// The production `GitRunner`, shelling out to the `git` binary.
pub struct SystemGit;

impl SystemGit {
    /// Runs one git subcommand rooted at `root` and returns its exit status.
    fn run(&self, root: &Path, operation: &str, args: &[&str]) -> AppResult<i32> {
        debug!("running git {} in {}", operation, root.display());

        let status = Command::new("git")
            .arg("-C")
            .arg(root)
            .args(args)
            .status()
            .map_err(GitError::Launch)?;

        Ok(status.code().unwrap_or(0))
    }

    /// Fails on any non-zero exit status.
    fn run_strict(&self, root: &Path, operation: &str, args: &[&str]) -> AppResult<()> {
        match self.run(root, operation, args)? {
            0 => Ok(()),
            code => Err(GitError::CommandFailed {
                operation: operation.to_string(),
                status: code,
            }
            .into()),
        }
    }

    /// Tolerates exit status 128 alongside success, matching the memorize
    /// workflow's long-standing behavior when the repository has nothing
    /// to do.
    fn run_lenient(&self, root: &Path, operation: &str, args: &[&str]) -> AppResult<()> {
        match self.run(root, operation, args)? {
            0 | 128 => Ok(()),
            code => Err(GitError::CommandFailed {
                operation: operation.to_string(),
                status: code,
            }
            .into()),
        }
    }
}

impl GitRunner for SystemGit {
    fn pull(&self, root: &Path) -> AppResult<()> {
        self.run_strict(root, "pull", &["pull"])
    }

    fn stage_all(&self, root: &Path) -> AppResult<()> {
        self.run_lenient(root, "add", &["add", "."])
    }

    fn commit_all(&self, root: &Path, message: &str) -> AppResult<()> {
        self.run_lenient(root, "commit", &["commit", "-am", message])
    }

    fn push(&self, root: &Path, remote: &str, branch: &str) -> AppResult<()> {
        self.run_lenient(root, "push", &["push", remote, branch])
    }
}

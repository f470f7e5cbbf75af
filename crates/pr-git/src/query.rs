//! Subprocess invocation of the `git` binary behind a narrow query trait.
//!
//! All inspection in this crate goes through [`GitQuery`], so tests can
//! substitute a scripted implementation and drive the analysis code without
//! a real repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::{Error, Result};

/// Captured output of a single git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

impl GitOutput {
    /// Returns stdout on success, or [`Error::CommandFailed`] carrying
    /// stderr when the invocation exited non-zero.
    pub fn checked(self) -> Result<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(Error::CommandFailed {
                stderr: self.stderr,
            })
        }
    }
}

/// A single-method capability for running git queries.
///
/// Only a spawn failure is an `Err`; a non-zero exit is reported through
/// [`GitOutput::success`] so each call site decides whether it is fatal.
pub trait GitQuery: Send + Sync {
    /// Runs `git` with the given arguments and captures its output.
    fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

/// Runs the real `git` binary in a fixed working directory.
#[derive(Debug, Clone)]
pub struct CliGit {
    workdir: PathBuf,
}

impl CliGit {
    /// Creates a runner for the repository at `workdir`.
    ///
    /// The directory is not validated up front; a missing or non-git
    /// directory surfaces through the first query's exit status.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Returns the working directory queries run in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl GitQuery for CliGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput> {
        debug!(?args, workdir = %self.workdir.display(), "Running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;
        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

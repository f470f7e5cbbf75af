//! Error types for pr-git

/// Result type for pr-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying git
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A checked git invocation exited non-zero; carries the captured stderr.
    #[error("Git command failed: {stderr}")]
    CommandFailed { stderr: String },

    /// The `git` binary could not be spawned at all.
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
}

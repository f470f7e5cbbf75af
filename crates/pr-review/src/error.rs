//! Error types for pr-review

use std::path::PathBuf;

/// Result type for pr-review operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in template and guideline handling
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered template file could not be read during a listing.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A named file failed to read for a reason other than absence.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Team guideline documents, read on demand from one directory.

use std::path::{Path, PathBuf};

use crate::templates::read_named_file;
use crate::Result;

/// Read-only access to named guideline documents.
///
/// There is no enumeration: callers must know exact filenames. This keeps
/// the guideline directory free-form where the template registry is fixed.
#[derive(Debug, Clone)]
pub struct GuidelineStore {
    dir: PathBuf,
}

impl GuidelineStore {
    /// Creates a store over `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads one guideline document by name.
    ///
    /// An absent file is `Ok(None)`, and names that would escape the
    /// directory are treated as absent.
    pub fn read(&self, filename: &str) -> Result<Option<String>> {
        read_named_file(&self.dir, filename)
    }
}

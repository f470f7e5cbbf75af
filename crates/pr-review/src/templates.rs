//! The fixed PR template registry and its on-disk store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Registered template filenames and their labels, in listing order.
///
/// The registry is assumed consistent with the configured directory: the
/// batch listing fails if any of these files is missing on disk.
pub const TEMPLATE_REGISTRY: &[(&str, &str)] = &[
    ("bug.md", "Bug Fix"),
    ("feature.md", "Feature"),
    ("docs.md", "Documentation"),
    ("refactor.md", "Refactor"),
    ("test.md", "Test"),
    ("performance.md", "Performance"),
    ("security.md", "Security"),
];

/// A template record as returned by the listing.
///
/// Field order here is the serialization order; `kind` serializes as
/// `type` to match the wire shape clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub filename: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// Read-only access to the registered PR templates in one directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Creates a store over `dir`.
    ///
    /// The directory is not validated up front; reads surface any problem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists every registered template with its full content, in registry
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateRead`] if any registered file is missing
    /// or unreadable; a broken registry fails the whole listing.
    pub fn list(&self) -> Result<Vec<Template>> {
        let mut templates = Vec::with_capacity(TEMPLATE_REGISTRY.len());
        for (filename, label) in TEMPLATE_REGISTRY {
            let path = self.dir.join(filename);
            let content = fs::read_to_string(&path)
                .map_err(|source| Error::TemplateRead { path, source })?;
            templates.push(Template {
                filename: (*filename).to_string(),
                kind: (*label).to_string(),
                content,
            });
        }
        Ok(templates)
    }

    /// Reads one template file by name.
    ///
    /// Lenient counterpart to [`list`](Self::list): an absent file is
    /// `Ok(None)`, and names that would escape the directory are treated
    /// as absent.
    pub fn read(&self, filename: &str) -> Result<Option<String>> {
        read_named_file(&self.dir, filename)
    }
}

/// Shared lenient single-file read used by both document stores.
pub(crate) fn read_named_file(dir: &Path, filename: &str) -> Result<Option<String>> {
    if !is_plain_filename(filename) {
        debug!(filename, "Refusing non-plain filename");
        return Ok(None);
    }
    let path = dir.join(filename);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::FileRead { path, source }),
    }
}

/// True when `name` is a bare filename with no traversal components.
fn is_plain_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && name != "." && name != ".."
}

//! [`ReviewWorkspace`] builder for template and guideline directories.
//!
//! Mirrors the directory layout the server is configured with: a working
//! repository root holding `templates/` and `team-guidelines/`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The seven registered template files with a short markdown body each.
///
/// Bodies are distinct so content assertions can tell templates apart.
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    (
        "bug.md",
        "## Bug Description\n\n## Root Cause\n\n## Fix Applied\n\n## Testing Done\n",
    ),
    (
        "feature.md",
        "## Feature Description\n\n## Motivation\n\n## Implementation Notes\n\n## Testing Done\n",
    ),
    (
        "docs.md",
        "## Documentation Changes\n\n## Pages Affected\n\n## Review Notes\n",
    ),
    (
        "refactor.md",
        "## Refactoring Summary\n\n## Behavior Impact\n\nNone expected.\n\n## Testing Done\n",
    ),
    (
        "test.md",
        "## Test Coverage Added\n\n## Gaps Remaining\n\n## How To Run\n",
    ),
    (
        "performance.md",
        "## Performance Improvement\n\n## Benchmarks\n\nBefore / after numbers.\n",
    ),
    (
        "security.md",
        "## Security Issue\n\n## Severity\n\n## Remediation\n\n## Disclosure Notes\n",
    ),
];

/// A temporary directory with `templates/` and `team-guidelines/`
/// subdirectories, plus helpers to populate them.
///
/// # Example
///
/// ```rust,no_run
/// use pr_test_utils::workspace::ReviewWorkspace;
///
/// let ws = ReviewWorkspace::new();
/// ws.write_default_templates();
/// ws.write_guideline("coding-standards.md", "# Standards\n");
/// ```
pub struct ReviewWorkspace {
    temp_dir: TempDir,
}

impl Default for ReviewWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewWorkspace {
    /// Create the workspace with both subdirectories present but empty.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("templates")).unwrap();
        fs::create_dir_all(temp_dir.path().join("team-guidelines")).unwrap();
        Self { temp_dir }
    }

    /// Return the workspace root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the template directory path.
    pub fn templates_dir(&self) -> PathBuf {
        self.root().join("templates")
    }

    /// Return the guideline directory path.
    pub fn guidelines_dir(&self) -> PathBuf {
        self.root().join("team-guidelines")
    }

    /// Write all seven registered template files from [`DEFAULT_TEMPLATES`].
    pub fn write_default_templates(&self) {
        for (filename, content) in DEFAULT_TEMPLATES {
            self.write_template(filename, content);
        }
    }

    /// Write a single template file.
    ///
    /// # Panics
    /// Panics if the write fails.
    pub fn write_template(&self, filename: &str, content: &str) {
        let path = self.templates_dir().join(filename);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("failed to write template {}: {e}", path.display()));
    }

    /// Write a single guideline document.
    ///
    /// # Panics
    /// Panics if the write fails.
    pub fn write_guideline(&self, filename: &str, content: &str) {
        let path = self.guidelines_dir().join(filename);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("failed to write guideline {}: {e}", path.display()));
    }

    /// Remove a template file, e.g. to simulate a missing registered entry.
    ///
    /// # Panics
    /// Panics if the removal fails.
    pub fn remove_template(&self, filename: &str) {
        let path = self.templates_dir().join(filename);
        fs::remove_file(&path)
            .unwrap_or_else(|e| panic!("failed to remove template {}: {e}", path.display()));
    }
}

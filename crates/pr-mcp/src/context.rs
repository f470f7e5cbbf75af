//! Shared handler context: the injected git runner and document stores.

use std::path::{Path, PathBuf};

use pr_git::{CliGit, GitQuery};
use pr_review::{GuidelineStore, TemplateStore};

/// Resolved filesystem configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerPaths {
    /// Working repository the git queries run in
    pub repo: PathBuf,
    /// Directory holding the registered PR templates
    pub templates_dir: PathBuf,
    /// Directory holding team guideline documents
    pub guidelines_dir: PathBuf,
}

impl ServerPaths {
    /// Builds the path set, resolving relative template and guideline
    /// directories against the repository root.
    pub fn resolve(repo: PathBuf, templates_dir: PathBuf, guidelines_dir: PathBuf) -> Self {
        let templates_dir = if templates_dir.is_absolute() {
            templates_dir
        } else {
            repo.join(templates_dir)
        };
        let guidelines_dir = if guidelines_dir.is_absolute() {
            guidelines_dir
        } else {
            repo.join(guidelines_dir)
        };
        Self {
            repo,
            templates_dir,
            guidelines_dir,
        }
    }
}

/// Everything a handler needs: the git capability plus both document
/// stores.
///
/// Tests substitute a scripted [`GitQuery`] through
/// [`ServerContext::with_git`] to drive the tool handlers without a real
/// repository.
pub struct ServerContext {
    git: Box<dyn GitQuery>,
    templates: TemplateStore,
    guidelines: GuidelineStore,
}

impl ServerContext {
    /// Production context: real git in `paths.repo`, stores over the
    /// configured directories.
    pub fn new(paths: &ServerPaths) -> Self {
        Self {
            git: Box::new(CliGit::new(&paths.repo)),
            templates: TemplateStore::new(&paths.templates_dir),
            guidelines: GuidelineStore::new(&paths.guidelines_dir),
        }
    }

    /// Context with a substituted git implementation.
    pub fn with_git(git: Box<dyn GitQuery>, templates_dir: &Path, guidelines_dir: &Path) -> Self {
        Self {
            git,
            templates: TemplateStore::new(templates_dir),
            guidelines: GuidelineStore::new(guidelines_dir),
        }
    }

    /// The git runner tool handlers query through.
    pub fn git(&self) -> &dyn GitQuery {
        self.git.as_ref()
    }

    /// The template store.
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// The guideline store.
    pub fn guidelines(&self) -> &GuidelineStore {
        &self.guidelines
    }
}

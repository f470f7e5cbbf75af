//! Shared test fixtures for the pr-agent workspace.
//!
//! Centralises the git repositories and review-document directories the
//! crate test suites build, so each suite does not grow its own copy.
//! This is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`git`]: real git repository fixtures built with the `git` CLI
//! - [`workspace`]: [`ReviewWorkspace`] builder for template and guideline
//!   directories
//!
//! [`ReviewWorkspace`]: workspace::ReviewWorkspace

pub mod git;
pub mod workspace;

//! Git inspection for the pr-agent MCP server
//!
//! Shells out to the `git` binary through the [`GitQuery`] trait and turns
//! the raw output into the change analysis and history views the server
//! serves.

pub mod error;
pub mod query;
pub mod analysis;
pub mod history;

pub use error::{Error, Result};
pub use query::{CliGit, GitOutput, GitQuery};
pub use analysis::{analyze_file_changes, ChangeAnalysis, DIFF_OMITTED};
pub use history::{recent_changes, CommitRecord, RecentChanges};

//! Change analysis between a base branch and the current `HEAD`.

use serde::{Deserialize, Serialize};

use crate::query::GitQuery;
use crate::Result;

/// Placeholder stored in [`ChangeAnalysis::diff`] when the caller opts out
/// of full diff content.
pub const DIFF_OMITTED: &str = "Diff not included (set include_diff=true to see full diff)";

/// Aggregated view of everything that changed relative to a base branch.
///
/// Field order here is the serialization order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeAnalysis {
    /// The base branch the comparison was made against.
    pub base_branch: String,
    /// Name-status listing of changed files (`git diff --name-status`).
    pub files_changed: String,
    /// Summary statistics (`git diff --stat`).
    pub statistics: String,
    /// One-line log of commits unique to `HEAD`.
    pub commits: String,
    /// Full diff text, or [`DIFF_OMITTED`] when not requested.
    pub diff: String,
}

/// Collects the change analysis for `base_branch...HEAD`.
///
/// Four queries run in sequence: changed file names and statuses, summary
/// statistics, the full diff (only when `include_diff`), and the one-line
/// commit log. Only the first query is fatal on a non-zero exit; the
/// remaining queries contribute whatever stdout they produce, so a partial
/// analysis still comes back when e.g. the stat query misbehaves.
pub fn analyze_file_changes(
    git: &dyn GitQuery,
    base_branch: &str,
    include_diff: bool,
) -> Result<ChangeAnalysis> {
    let range = format!("{base_branch}...HEAD");

    let files_changed = git.run(&["diff", "--name-status", &range])?.checked()?;
    let statistics = git.run(&["diff", "--stat", &range])?.stdout;

    let diff = if include_diff {
        git.run(&["diff", &range])?.stdout
    } else {
        DIFF_OMITTED.to_string()
    };

    let commits = git
        .run(&["log", "--oneline", &format!("{base_branch}..HEAD")])?
        .stdout;

    Ok(ChangeAnalysis {
        base_branch: base_branch.to_string(),
        files_changed,
        statistics,
        commits,
        diff,
    })
}

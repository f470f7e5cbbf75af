//! Recent commit history via the pipe-delimited git log format.

use serde::{Deserialize, Serialize};

use crate::query::GitQuery;
use crate::Result;

/// One commit parsed from the `%h|%an|%ae|%ad|%s` log format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Short commit hash
    pub hash: String,
    /// Author name
    pub author: String,
    /// Author email
    pub email: String,
    /// Author date, `YYYY-MM-DD`
    pub date: String,
    /// Subject line, truncated at the first `|` if the subject contains one
    pub message: String,
}

/// Recent history: structured commits plus a raw statistics log.
///
/// Field order here is the serialization order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentChanges {
    /// Up to the last 20 commits, newest first.
    pub recent_commits: Vec<CommitRecord>,
    /// Raw `git log --stat --oneline` output for the last 10 entries.
    pub change_statistics: String,
    /// Number of entries in `recent_commits`.
    pub total_commits: usize,
}

/// Fetches the last 20 commits as structured records plus a 10-entry
/// statistics log.
///
/// The structured log query is fatal on a non-zero exit; the statistics
/// query contributes whatever stdout it produces. Malformed log lines are
/// dropped rather than failing the batch.
pub fn recent_changes(git: &dyn GitQuery) -> Result<RecentChanges> {
    let log = git
        .run(&[
            "log",
            "--pretty=format:%h|%an|%ae|%ad|%s",
            "-20",
            "--date=short",
        ])?
        .checked()?;

    let recent_commits = parse_commit_log(&log);
    let change_statistics = git.run(&["log", "--stat", "--oneline", "-10"])?.stdout;

    Ok(RecentChanges {
        total_commits: recent_commits.len(),
        recent_commits,
        change_statistics,
    })
}

/// Splits a raw log into commit records, one per pipe-delimited line.
fn parse_commit_log(raw: &str) -> Vec<CommitRecord> {
    raw.trim()
        .split('\n')
        .filter(|line| !line.is_empty())
        .filter_map(parse_commit_line)
        .collect()
}

/// Parses a single `hash|author|email|date|subject` line.
///
/// Lines with fewer than five fields yield `None`. Only the fifth field
/// becomes the message, so a subject containing `|` loses its tail.
fn parse_commit_line(line: &str) -> Option<CommitRecord> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 5 {
        return None;
    }
    Some(CommitRecord {
        hash: fields[0].to_string(),
        author: fields[1].to_string(),
        email: fields[2].to_string(),
        date: fields[3].to_string(),
        message: fields[4].to_string(),
    })
}

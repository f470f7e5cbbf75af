//! The team's static review-process policy.

use serde::{Deserialize, Serialize};

/// Reviewer expectations by PR size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrSizeLimits {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// Response-time expectations by urgency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSla {
    pub critical: String,
    pub high: String,
    pub normal: String,
    pub low: String,
}

/// What must hold before a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequirements {
    pub ci_status: String,
    pub approvals: String,
    pub conflicts: String,
    pub documentation: String,
}

/// Where and how review traffic is announced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    pub slack_channel: String,
    pub urgent_prefix: String,
    pub review_request: String,
    pub merge_notification: String,
}

/// Team review process and requirements.
///
/// [`ReviewProcess::standard`] returns the same value on every call, so
/// its serialized form is byte-identical across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProcess {
    pub pr_size_limits: PrSizeLimits,
    pub review_sla: ReviewSla,
    pub merge_requirements: MergeRequirements,
    pub communication: Communication,
}

impl ReviewProcess {
    /// The team's standard policy.
    pub fn standard() -> Self {
        Self {
            pr_size_limits: PrSizeLimits {
                small: "< 100 lines: 1 reviewer".to_string(),
                medium: "100-500 lines: 2 reviewers".to_string(),
                large: "> 500 lines: Split into smaller PRs or schedule review meeting"
                    .to_string(),
            },
            review_sla: ReviewSla {
                critical: "Within 2 hours".to_string(),
                high: "Within 4 hours".to_string(),
                normal: "Within 1 business day".to_string(),
                low: "Within 2 business days".to_string(),
            },
            merge_requirements: MergeRequirements {
                ci_status: "All checks must pass".to_string(),
                approvals: "Required based on PR size".to_string(),
                conflicts: "Must be resolved before merge".to_string(),
                documentation: "Update if API changes".to_string(),
            },
            communication: Communication {
                slack_channel: "#pull-requests".to_string(),
                urgent_prefix: "@here".to_string(),
                review_request: "Please review: {pr_link}".to_string(),
                merge_notification: "Merged: {pr_title}".to_string(),
            },
        }
    }
}

//! Template suggestion from a change-type label.

use serde::{Deserialize, Serialize};

use crate::templates::Template;

/// Static hint appended to every suggestion.
pub const USAGE_HINT: &str =
    "Claude can help you fill out this template based on the specific changes in your PR.";

/// A suggestion bundling the selected template with its rationale.
///
/// Field order here is the serialization order. `template_content`
/// duplicates the recommended template's body for clients that only want
/// the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub recommended_template: Template,
    pub reasoning: String,
    pub template_content: String,
    pub usage_hint: String,
}

/// Maps a change-type label to a registered template filename.
///
/// Matching is case-insensitive over a fixed synonym table; unrecognized
/// labels fall back to the feature template.
pub fn template_for_change_type(change_type: &str) -> &'static str {
    match change_type.to_lowercase().as_str() {
        "bug" | "fix" => "bug.md",
        "feature" | "enhancement" => "feature.md",
        "docs" | "documentation" => "docs.md",
        "refactor" | "cleanup" => "refactor.md",
        "test" | "testing" => "test.md",
        "performance" | "optimization" => "performance.md",
        "security" => "security.md",
        _ => "feature.md",
    }
}

/// Selects the best-matching template from `templates` for the described
/// change.
///
/// The reasoning line repeats `changes_summary` and `change_type`
/// verbatim. When no listed template carries the mapped filename the first
/// listed template is used instead; with the full registry that branch is
/// unreachable because every label maps to a registered file, but it keeps
/// the selection total for reduced listings. Returns `None` only when
/// `templates` is empty.
pub fn suggest(
    templates: &[Template],
    changes_summary: &str,
    change_type: &str,
) -> Option<Suggestion> {
    let wanted = template_for_change_type(change_type);
    let selected = templates
        .iter()
        .find(|t| t.filename == wanted)
        .or_else(|| templates.first())?;

    Some(Suggestion {
        recommended_template: selected.clone(),
        reasoning: format!(
            "Based on your analysis: '{changes_summary}', this appears to be a {change_type} change."
        ),
        template_content: selected.content.clone(),
        usage_hint: USAGE_HINT.to_string(),
    })
}

//! Workflow Integration Tests
//!
//! These tests drive the server the way an MCP client session would,
//! request by request, and validate the combined behavior of the git,
//! review, and protocol layers under both healthy and degraded
//! environments.

use pr_mcp::{PrMcpServer, ServerPaths};
use pr_test_utils::git;
use pr_test_utils::workspace::ReviewWorkspace;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// One simulated client session against a fresh server.
pub struct Session {
    _repo: TempDir,
    ws: ReviewWorkspace,
    server: PrMcpServer,
    next_id: i64,
}

impl Session {
    /// Start a session over a prepared repository.
    pub async fn start(prepare_repo: impl FnOnce(&Path)) -> Self {
        let repo = TempDir::new().unwrap();
        prepare_repo(repo.path());

        let ws = ReviewWorkspace::new();
        ws.write_default_templates();
        ws.write_guideline("pr-guidelines.md", "# PR Guidelines\n\nKeep PRs focused.\n");

        let paths = ServerPaths {
            repo: repo.path().to_path_buf(),
            templates_dir: ws.templates_dir(),
            guidelines_dir: ws.guidelines_dir(),
        };
        let mut server = PrMcpServer::new(paths);
        server.initialize().await.unwrap();

        let mut session = Self {
            _repo: repo,
            ws,
            server,
            next_id: 0,
        };

        let init = session.request("initialize", json!({})).await;
        assert!(init.get("result").is_some(), "handshake failed: {init}");
        session
    }

    /// Send one request and parse the response.
    pub async fn request(&mut self, method: &str, params: Value) -> Value {
        self.next_id += 1;
        let message = json!({
            "jsonrpc": "2.0",
            "id": self.next_id,
            "method": method,
            "params": params
        });
        let response = self
            .server
            .handle_message(&serde_json::to_string(&message).unwrap())
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["id"], self.next_id, "response id mismatch");
        parsed
    }

    /// Call a tool and return the text payload, asserting it succeeded.
    pub async fn call_tool(&mut self, name: &str, arguments: Value) -> String {
        let response = self
            .request(
                "tools/call",
                json!({"name": name, "arguments": arguments}),
            )
            .await;
        let result = &response["result"];
        assert!(
            result.get("is_error").is_none(),
            "tool {name} failed: {response}"
        );
        result["content"][0]["text"].as_str().unwrap().to_string()
    }

    /// Read a resource and return its single content entry.
    pub async fn read_resource(&mut self, uri: &str) -> Value {
        let response = self.request("resources/read", json!({"uri": uri})).await;
        assert!(
            response.get("error").is_none(),
            "resource {uri} failed: {response}"
        );
        response["result"]["contents"][0].clone()
    }
}

// =============================================================================
// Healthy Workflows
// =============================================================================

#[tokio::test]
async fn test_feature_pr_preparation_workflow() {
    let mut session = Session::start(git::repo_with_feature_branch).await;

    // The client inspects the branch first
    let analysis: Value =
        serde_json::from_str(&session.call_tool("analyze_file_changes", json!({})).await).unwrap();
    assert!(
        analysis["files_changed"]
            .as_str()
            .unwrap()
            .contains("src/lib.rs")
    );

    // Then asks for a template matching what it saw
    let suggestion: Value = serde_json::from_str(
        &session
            .call_tool(
                "suggest_template",
                json!({
                    "changes_summary": "Adds an answer function to the library",
                    "change_type": "feature"
                }),
            )
            .await,
    )
    .unwrap();
    let filename = suggestion["recommended_template"]["filename"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(filename, "feature.md");

    // The recommended template is also listed and readable as a resource
    let listing = session.request("resources/list", json!({})).await;
    let uris: Vec<&str> = listing["result"]["resources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["uri"].as_str().unwrap())
        .collect();
    let template_uri = format!("file://templates/{filename}");
    assert!(uris.contains(&template_uri.as_str()));

    let template = session.read_resource(&template_uri).await;
    assert_eq!(
        template["text"], suggestion["recommended_template"]["content"],
        "resource content must match the suggestion"
    );

    // Finally the client consults team context before opening the PR
    let guideline = session
        .read_resource("file://team-guidelines/pr-guidelines.md")
        .await;
    assert!(
        guideline["text"]
            .as_str()
            .unwrap()
            .contains("Keep PRs focused")
    );

    let process = session.read_resource("team://review-process").await;
    let process_doc: Value = serde_json::from_str(process["text"].as_str().unwrap()).unwrap();
    assert!(
        process_doc["merge_requirements"]["ci_status"]
            .as_str()
            .unwrap()
            .contains("must pass")
    );
}

#[tokio::test]
async fn test_bugfix_workflow_without_diff() {
    let mut session = Session::start(git::repo_with_feature_branch).await;

    let analysis: Value = serde_json::from_str(
        &session
            .call_tool("analyze_file_changes", json!({"include_diff": false}))
            .await,
    )
    .unwrap();
    assert_eq!(
        analysis["diff"],
        "Diff not included (set include_diff=true to see full diff)"
    );
    assert!(
        !analysis["statistics"].as_str().unwrap().is_empty(),
        "statistics are collected even without the diff"
    );

    let suggestion: Value = serde_json::from_str(
        &session
            .call_tool(
                "suggest_template",
                json!({
                    "changes_summary": "Fixes an off-by-one in the answer",
                    "change_type": "fix"
                }),
            )
            .await,
    )
    .unwrap();
    assert_eq!(suggestion["recommended_template"]["filename"], "bug.md");
    assert_eq!(
        suggestion["reasoning"],
        "Based on your analysis: 'Fixes an off-by-one in the answer', \
         this appears to be a fix change."
    );
}

#[tokio::test]
async fn test_workflow_without_branch_divergence() {
    // HEAD sits on main, so every comparison range is empty
    let mut session = Session::start(|path| {
        git::repo_with_commits(path, &[("README.md", "# Project\n", "Initial commit")]);
    })
    .await;

    let analysis: Value =
        serde_json::from_str(&session.call_tool("analyze_file_changes", json!({})).await).unwrap();
    assert_eq!(analysis["files_changed"], "");
    assert_eq!(analysis["commits"], "");

    // Suggestion quality does not depend on the analysis outcome
    let suggestion: Value = serde_json::from_str(
        &session
            .call_tool(
                "suggest_template",
                json!({
                    "changes_summary": "Planning a docs update",
                    "change_type": "docs"
                }),
            )
            .await,
    )
    .unwrap();
    assert_eq!(suggestion["recommended_template"]["filename"], "docs.md");
}

// =============================================================================
// Degraded Environments
// =============================================================================

#[tokio::test]
async fn test_workflow_with_unborn_repository() {
    // Initialized repo with no commits: every git range query fails
    let mut session = Session::start(git::init_repo).await;

    let analysis_text = session.call_tool("analyze_file_changes", json!({})).await;
    assert!(
        analysis_text.starts_with("Error analyzing changes: "),
        "analysis should surface the git failure, got: {analysis_text}"
    );

    let recent = session.read_resource("git://recent-changes").await;
    let recent_doc: Value = serde_json::from_str(recent["text"].as_str().unwrap()).unwrap();
    assert!(
        recent_doc["error"].as_str().unwrap().starts_with("Git error: "),
        "history resource should report the failure, got: {recent_doc}"
    );

    // Review data is still fully available
    let templates: Value =
        serde_json::from_str(&session.call_tool("get_pr_templates", json!({})).await).unwrap();
    assert_eq!(templates.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_workflow_survives_missing_guideline() {
    let mut session = Session::start(git::repo_with_feature_branch).await;

    let missing = session
        .read_resource("file://team-guidelines/onboarding.md")
        .await;
    assert_eq!(missing["text"], "Guideline file onboarding.md not found");

    // The miss does not disturb the rest of the session
    let suggestion: Value = serde_json::from_str(
        &session
            .call_tool(
                "suggest_template",
                json!({
                    "changes_summary": "Hardens input validation",
                    "change_type": "security"
                }),
            )
            .await,
    )
    .unwrap();
    assert_eq!(suggestion["recommended_template"]["filename"], "security.md");
}

#[tokio::test]
async fn test_template_edits_show_up_mid_session() {
    let mut session = Session::start(git::repo_with_feature_branch).await;

    let before: Value =
        serde_json::from_str(&session.call_tool("get_pr_templates", json!({})).await).unwrap();
    assert!(
        !before[0]["content"]
            .as_str()
            .unwrap()
            .contains("Reproduction")
    );

    // Templates live on disk, so an edit is visible to the next call
    session.ws.write_template(
        "bug.md",
        "## Bug Description\n\n## Reproduction\n\n## Fix Applied\n",
    );

    let after: Value =
        serde_json::from_str(&session.call_tool("get_pr_templates", json!({})).await).unwrap();
    assert!(after[0]["content"].as_str().unwrap().contains("Reproduction"));
}

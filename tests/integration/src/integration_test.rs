//! End-to-end integration test for the vertical slice
//!
//! This test exercises the complete flow: change analysis -> template
//! suggestion -> resource serving, across the pr-git, pr-review, and
//! pr-mcp crates together.

use pr_git::{analyze_file_changes, recent_changes, CliGit};
use pr_mcp::{PrMcpServer, ServerPaths};
use pr_review::{suggest, GuidelineStore, ReviewProcess, TemplateStore};
use pr_test_utils::git;
use pr_test_utils::workspace::ReviewWorkspace;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Set up a feature-branch repository next to populated review directories.
fn setup() -> (TempDir, ReviewWorkspace) {
    let repo = TempDir::new().unwrap();
    git::repo_with_feature_branch(repo.path());

    let ws = ReviewWorkspace::new();
    ws.write_default_templates();
    ws.write_guideline(
        "coding-standards.md",
        "# Coding Standards\n\nRun rustfmt before pushing.\n",
    );
    (repo, ws)
}

#[test]
fn test_analyze_then_suggest_flow() {
    let (repo, ws) = setup();

    // Analyze the branch with the CLI-backed runner
    let git_runner = CliGit::new(repo.path());
    let analysis = analyze_file_changes(&git_runner, "main", true).unwrap();
    assert!(analysis.files_changed.contains("src/lib.rs"));
    assert!(analysis.commits.contains("Add answer function"));

    // Feed a summary of the analysis into the suggestion step
    let templates = TemplateStore::new(ws.templates_dir()).list().unwrap();
    let suggestion = suggest(&templates, "Adds an answer function", "feature").unwrap();

    assert_eq!(suggestion.recommended_template.filename, "feature.md");
    assert!(
        suggestion
            .template_content
            .contains("## Feature Description"),
        "Suggestion should carry the template body"
    );

    // The suggested content must be exactly what the store serves
    let stored = TemplateStore::new(ws.templates_dir())
        .read("feature.md")
        .unwrap()
        .unwrap();
    assert_eq!(suggestion.template_content, stored);
}

#[test]
fn test_recent_changes_reflects_history() {
    let repo = TempDir::new().unwrap();
    git::repo_with_history(repo.path(), 5);

    let git_runner = CliGit::new(repo.path());
    let changes = recent_changes(&git_runner).unwrap();

    assert_eq!(changes.total_commits, 5);
    assert_eq!(changes.recent_commits[0].message, "Commit 4");
    assert_eq!(changes.recent_commits[4].message, "Commit 0");
    assert!(!changes.change_statistics.is_empty());
}

#[test]
fn test_stores_read_from_configured_directories() {
    let (_repo, ws) = setup();

    let templates = TemplateStore::new(ws.templates_dir());
    let listing = templates.list().unwrap();
    assert_eq!(listing.len(), 7);

    let guidelines = GuidelineStore::new(ws.guidelines_dir());
    let doc = guidelines.read("coding-standards.md").unwrap().unwrap();
    assert!(doc.contains("rustfmt"));

    // Unknown names resolve to None rather than an error
    assert!(guidelines.read("missing.md").unwrap().is_none());
}

#[tokio::test]
async fn test_full_vertical_slice() {
    let (repo, ws) = setup();

    let paths = ServerPaths {
        repo: repo.path().to_path_buf(),
        templates_dir: ws.templates_dir(),
        guidelines_dir: ws.guidelines_dir(),
    };
    let mut server = PrMcpServer::new(paths);
    server.initialize().await.unwrap();

    // 1. Client handshake
    let init: Value = call(
        &server,
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    )
    .await;
    assert_eq!(init["result"]["serverInfo"]["name"], "pr-mcp");

    // 2. Analyze the branch
    let analyze: Value = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {
                "name": "analyze_file_changes",
                "arguments": {"include_diff": false}
            }
        }),
    )
    .await;
    let analysis: Value = inner_json(&analyze);
    assert!(
        analysis["files_changed"]
            .as_str()
            .unwrap()
            .contains("src/lib.rs")
    );
    assert_eq!(
        analysis["diff"],
        "Diff not included (set include_diff=true to see full diff)"
    );

    // 3. Ask for a template suggestion based on what the client saw
    let suggest: Value = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "suggest_template",
                "arguments": {
                    "changes_summary": "Adds a public answer function",
                    "change_type": "feature"
                }
            }
        }),
    )
    .await;
    let suggestion: Value = inner_json(&suggest);
    assert_eq!(suggestion["recommended_template"]["filename"], "feature.md");

    // 4. Fetch the recommended template as a resource
    let template: Value = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "resources/read",
            "params": {"uri": "file://templates/feature.md"}
        }),
    )
    .await;
    assert_eq!(
        template["result"]["contents"][0]["text"],
        suggestion["recommended_template"]["content"]
    );

    // 5. Consult the review process for merge requirements
    let process: Value = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "resources/read",
            "params": {"uri": "team://review-process"}
        }),
    )
    .await;
    let process_doc: Value =
        serde_json::from_str(process["result"]["contents"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(
        process_doc,
        serde_json::to_value(ReviewProcess::standard()).unwrap(),
        "The served process document must match the library constant"
    );
}

/// Send one request through the server and parse the response.
async fn call(server: &PrMcpServer, request: Value) -> Value {
    let response = server
        .handle_message(&serde_json::to_string(&request).unwrap())
        .await
        .unwrap();
    serde_json::from_str(&response).unwrap()
}

/// Parse the JSON payload inside a tool result's text content.
fn inner_json(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

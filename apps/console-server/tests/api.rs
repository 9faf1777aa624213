// End-to-end tests: real router on an ephemeral listener, driven through
// the cached client data layer.

use std::sync::Arc;

use agentos_console::client::{ClientError, ConsoleClient};
use agentos_console::models::*;
use agentos_console::server;
use agentos_console::store::ConsoleStore;
use reqwest::StatusCode;
use serde_json::json;

async fn spawn_server() -> String {
    let store = Arc::new(ConsoleStore::seeded());
    let app = server::router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    format!("http://{addr}")
}

fn sample_new_agent(name: &str) -> NewAgent {
    serde_json::from_value(json!({
        "name": name,
        "description": "An agent created by the integration suite",
        "systemPrompt": "You are a test fixture. Answer briefly.",
        "source": "user-created",
        "status": "testing",
        "tools": ["web-search"],
        "capabilities": ["testing"],
        "category": "QA",
    }))
    .expect("valid agent body")
}

fn api_status(err: ClientError) -> StatusCode {
    match err {
        ClientError::Api { status, .. } => status,
        other => panic!("expected API error, got {other}"),
    }
}

#[tokio::test]
async fn agent_round_trip_preserves_editable_fields() {
    let client = ConsoleClient::new(spawn_server().await);

    let created = client.create_agent(&sample_new_agent("Round Trip")).await.unwrap();
    assert_eq!(created.usage_count, 0);
    assert!(!created.id.is_empty());

    let fetched = client.agent(&created.id).await.unwrap();
    assert_eq!(fetched.name, "Round Trip");
    assert_eq!(fetched.status, AgentStatus::Testing);
    assert_eq!(fetched.tools, vec![ToolKind::WebSearch]);
    assert_eq!(fetched.category.as_deref(), Some("QA"));
}

#[tokio::test]
async fn agent_update_merges_and_404s_on_unknown() {
    let client = ConsoleClient::new(spawn_server().await);
    let created = client.create_agent(&sample_new_agent("Patchable")).await.unwrap();

    let patch = AgentPatch {
        status: Some(AgentStatus::Archived),
        ..Default::default()
    };
    let updated = client.update_agent(&created.id, &patch).await.unwrap();
    assert_eq!(updated.status, AgentStatus::Archived);
    assert_eq!(updated.name, "Patchable");
    assert!(updated.updated_at >= created.updated_at);

    let err = client.update_agent("no-such-id", &patch).await.unwrap_err();
    assert_eq!(api_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn agent_delete_twice_reports_not_found() {
    let client = ConsoleClient::new(spawn_server().await);
    let created = client.create_agent(&sample_new_agent("Doomed")).await.unwrap();

    client.delete_agent(&created.id).await.unwrap();
    let err = client.delete_agent(&created.id).await.unwrap_err();
    assert_eq!(api_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_agent_validation_failure_is_400() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/agents"))
        .json(&json!({
            "name": "",
            "description": "x",
            "systemPrompt": "y",
            "source": "community",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "name must not be empty");
}

#[tokio::test]
async fn install_template_copies_config_and_bumps_downloads() {
    let client = ConsoleClient::new(spawn_server().await);

    let before = client.template("t1").await.unwrap();
    let agent = client.install_template("t1").await.unwrap();

    assert_eq!(agent.name, before.name);
    assert_eq!(
        Some(agent.system_prompt.as_str()),
        before.agent_config.system_prompt.as_deref()
    );
    assert_eq!(agent.tools, before.agent_config.tools);
    assert_eq!(agent.capabilities, before.agent_config.capabilities);
    assert_eq!(agent.category.as_deref(), Some(before.category.as_str()));
    assert_eq!(agent.icon, before.icon);
    assert_eq!(agent.source, AgentSource::UserCreated);
    assert_eq!(agent.status, AgentStatus::Testing);
    assert_eq!(agent.usage_count, 0);

    // The install invalidated the cached template, so this refetches and
    // sees the incremented counter.
    let after = client.template("t1").await.unwrap();
    assert_eq!(after.downloads, before.downloads + 1);
}

#[tokio::test]
async fn install_unknown_template_is_404() {
    let client = ConsoleClient::new(spawn_server().await);
    let err = client.install_template("nope").await.unwrap_err();
    assert_eq!(api_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn templates_list_featured_first_then_downloads() {
    let client = ConsoleClient::new(spawn_server().await);
    let templates = client.templates().await.unwrap();
    assert!(templates.len() >= 2);

    let mut seen_plain = false;
    for template in &templates {
        if !template.featured {
            seen_plain = true;
        } else {
            assert!(!seen_plain, "featured template after a non-featured one");
        }
    }
    for pair in templates.windows(2) {
        if pair[0].featured == pair[1].featured {
            assert!(pair[0].downloads >= pair[1].downloads);
        }
    }
}

#[tokio::test]
async fn template_round_trip_preserves_editable_fields() {
    let client = ConsoleClient::new(spawn_server().await);

    let new: NewTemplate = serde_json::from_value(json!({
        "name": "Release Notes Writer",
        "description": "Drafts release notes from merged pull requests",
        "category": "Development",
        "agentConfig": {
            "systemPrompt": "You turn merged pull requests into release notes.",
            "tools": ["api-call"],
            "capabilities": ["summarization"],
        },
        "icon": "RN",
        "rating": 4,
        "createdBy": "ReleaseTeam",
        "featured": false,
    }))
    .unwrap();

    let created = client.create_template(&new).await.unwrap();
    assert_eq!(created.downloads, 0);
    assert!(!created.id.is_empty());

    let fetched = client.template(&created.id).await.unwrap();
    assert_eq!(fetched.name, "Release Notes Writer");
    assert_eq!(
        fetched.description,
        "Drafts release notes from merged pull requests"
    );
    assert_eq!(fetched.category, "Development");
    assert_eq!(
        fetched.agent_config.system_prompt.as_deref(),
        Some("You turn merged pull requests into release notes.")
    );
    assert_eq!(fetched.agent_config.tools, vec![ToolKind::ApiCall]);
    assert_eq!(fetched.agent_config.capabilities, vec!["summarization"]);
    assert_eq!(fetched.icon.as_deref(), Some("RN"));
    assert_eq!(fetched.rating, 4);
    assert_eq!(fetched.created_by, "ReleaseTeam");
    assert!(!fetched.featured);
    assert_eq!(fetched.downloads, 0);
}

#[tokio::test]
async fn task_round_trip_preserves_editable_fields() {
    let client = ConsoleClient::new(spawn_server().await);

    let created = client
        .create_task(
            &serde_json::from_value(json!({
                "title": "Quarterly churn report",
                "description": "Summarize churn drivers for Q2",
                "agentIds": ["2", "3"],
                "cost": 12,
            }))
            .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status, TaskStatus::Pending);
    assert!(created.completed_at.is_none());

    let fetched = client.task(&created.id).await.unwrap();
    assert_eq!(fetched.title, "Quarterly churn report");
    assert_eq!(
        fetched.description.as_deref(),
        Some("Summarize churn drivers for Q2")
    );
    assert_eq!(fetched.agent_ids, vec!["2", "3"]);
    assert_eq!(fetched.cost, 12);
    assert_eq!(fetched.progress, 0);
}

#[tokio::test]
async fn task_messages_scoped_and_in_creation_order() {
    let client = ConsoleClient::new(spawn_server().await);

    let task = client
        .create_task(
            &serde_json::from_value(json!({
                "title": "Chat transcript",
                "agentIds": ["1"],
            }))
            .unwrap(),
        )
        .await
        .unwrap();

    for i in 0..3 {
        client
            .create_message(
                &serde_json::from_value(json!({
                    "taskId": task.id,
                    "role": if i % 2 == 0 { "user" } else { "agent" },
                    "content": format!("line {i}"),
                }))
                .unwrap(),
            )
            .await
            .unwrap();
    }
    // Noise on another task must not leak in.
    client
        .create_message(
            &serde_json::from_value(json!({
                "taskId": "task1",
                "role": "system",
                "content": "unrelated",
            }))
            .unwrap(),
        )
        .await
        .unwrap();

    let messages = client.messages_for_task(&task.id).await.unwrap();
    assert_eq!(messages.len(), 3);
    for (i, msg) in messages.iter().enumerate() {
        assert_eq!(msg.content, format!("line {i}"));
        assert_eq!(msg.task_id, task.id);
    }
}

#[tokio::test]
async fn task_partial_update_merges() {
    let client = ConsoleClient::new(spawn_server().await);
    let task = client.task("task3").await.unwrap();
    assert_eq!(task.status, TaskStatus::Running);

    let patch = TaskPatch {
        status: Some(TaskStatus::Completed),
        progress: Some(100),
        ..Default::default()
    };
    let updated = client.update_task("task3", &patch).await.unwrap();
    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.title, task.title);
    assert_eq!(updated.cost, task.cost);
}

#[tokio::test]
async fn workflow_round_trip_and_delete() {
    let client = ConsoleClient::new(spawn_server().await);

    let mut draft = agentos_console::builder::WorkflowDraft::new("Lead Pipeline");
    draft.add_agent("3").unwrap();
    draft.add_agent("1").unwrap();
    let new = draft.submit().unwrap();

    let created = client.create_workflow(&new).await.unwrap();
    assert_eq!(created.execution_type, ExecutionType::Sequential);
    assert_eq!(created.status, WorkflowStatus::Draft);
    assert_eq!(created.nodes.len(), 2);
    assert_eq!(created.nodes[0].agent_id, "3");
    assert_eq!(created.nodes[1].order, 1);

    let listed = client.workflows().await.unwrap();
    assert!(listed.iter().any(|w| w.id == created.id));

    client.delete_workflow(&created.id).await.unwrap();
    let relisted = client.workflows().await.unwrap();
    assert!(!relisted.iter().any(|w| w.id == created.id));

    let err = client.workflow(&created.id).await.unwrap_err();
    assert_eq!(api_status(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn statistics_endpoints_shape() {
    let client = ConsoleClient::new(spawn_server().await);

    let stats = client.statistics().await.unwrap();
    assert_eq!(stats.total_agents, 4);
    assert_eq!(stats.api_calls, stats.total_tasks * 3);

    let usage = client.usage_series().await.unwrap();
    assert_eq!(usage.len(), 7);
    assert!(usage.windows(2).all(|p| p[0].date < p[1].date));

    let top = client.top_agents().await.unwrap();
    assert!(top.len() <= 5);
    assert!(!top.is_empty());
    assert_eq!(top[0].agent_id, "1"); // highest seeded usage count
}

#[tokio::test]
async fn cache_serves_reads_and_mutations_invalidate() {
    let client = ConsoleClient::new(spawn_server().await);

    let first = client.agents().await.unwrap();
    assert!(client.cached_keys().contains(&"/api/agents".to_string()));

    // Cached: identical even though a second fetch would reorder freely.
    let second = client.agents().await.unwrap();
    assert_eq!(first.len(), second.len());

    client.create_agent(&sample_new_agent("Invalidator")).await.unwrap();
    assert!(!client.cached_keys().contains(&"/api/agents".to_string()));

    let third = client.agents().await.unwrap();
    assert_eq!(third.len(), first.len() + 1);
}

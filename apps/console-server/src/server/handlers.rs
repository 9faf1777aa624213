// [[AgentOS]]/apps/console-server/src/server/handlers.rs
// Purpose: API handlers. Validate, delegate to the store, shape responses.
// Architecture: API Layer
// Dependencies: Axum, ConsoleStore

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::store::ConsoleStore;

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "AgentOS Console Server is running".to_string(),
    })
}

// === Agents ===

pub async fn list_agents(State(store): State<Arc<ConsoleStore>>) -> Json<Vec<Agent>> {
    Json(store.agents())
}

pub async fn get_agent(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Result<Json<Agent>, ApiError> {
    store.agent(&id).map(Json).ok_or(ApiError::NotFound("Agent"))
}

pub async fn create_agent(
    State(store): State<Arc<ConsoleStore>>,
    Json(new): Json<NewAgent>,
) -> Result<(StatusCode, Json<Agent>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    let agent = store.create_agent(new);
    tracing::info!("Created agent {} ({})", agent.name, agent.id);
    Ok((StatusCode::CREATED, Json(agent)))
}

pub async fn update_agent(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
    Json(patch): Json<AgentPatch>,
) -> Result<Json<Agent>, ApiError> {
    store
        .update_agent(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("Agent"))
}

pub async fn delete_agent(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete_agent(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Agent"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromTemplateRequest {
    pub template_id: String,
}

/// Stamps a template's stored configuration into a new agent, then bumps the
/// template's download counter. The two writes are not transactional; a
/// failed increment only under-reports downloads.
pub async fn create_agent_from_template(
    State(store): State<Arc<ConsoleStore>>,
    Json(req): Json<FromTemplateRequest>,
) -> Result<(StatusCode, Json<Agent>), ApiError> {
    if req.template_id.trim().is_empty() {
        return Err(ApiError::Validation("templateId is required".into()));
    }

    let template = store
        .template(&req.template_id)
        .ok_or(ApiError::NotFound("Template"))?;

    let new = NewAgent {
        name: template.name.clone(),
        description: template.description.clone(),
        system_prompt: template.agent_config.system_prompt.clone().unwrap_or_default(),
        source: AgentSource::UserCreated,
        status: AgentStatus::Testing,
        capabilities: template.agent_config.capabilities.clone(),
        tools: template.agent_config.tools.clone(),
        input_schema: None,
        output_schema: None,
        category: Some(template.category.clone()),
        icon: template.icon.clone(),
        created_by: None,
        rating: 0,
    };

    let agent = store.create_agent(new);
    if !store.increment_template_downloads(&req.template_id) {
        tracing::warn!(
            "Template {} vanished before download increment",
            req.template_id
        );
    }

    tracing::info!("Installed template {} as agent {}", template.id, agent.id);
    Ok((StatusCode::CREATED, Json(agent)))
}

// === Tasks ===

pub async fn list_tasks(State(store): State<Arc<ConsoleStore>>) -> Json<Vec<Task>> {
    Json(store.tasks())
}

pub async fn get_task(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    store.task(&id).map(Json).ok_or(ApiError::NotFound("Task"))
}

pub async fn create_task(
    State(store): State<Arc<ConsoleStore>>,
    Json(new): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(store.create_task(new))))
}

pub async fn update_task(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    store
        .update_task(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("Task"))
}

// === Messages ===

pub async fn list_task_messages(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Json<Vec<Message>> {
    Json(store.messages_for_task(&id))
}

pub async fn create_message(
    State(store): State<Arc<ConsoleStore>>,
    Json(new): Json<NewMessage>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(store.create_message(new))))
}

// === Templates ===

pub async fn list_templates(State(store): State<Arc<ConsoleStore>>) -> Json<Vec<Template>> {
    Json(store.templates())
}

pub async fn get_template(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Result<Json<Template>, ApiError> {
    store
        .template(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Template"))
}

pub async fn create_template(
    State(store): State<Arc<ConsoleStore>>,
    Json(new): Json<NewTemplate>,
) -> Result<(StatusCode, Json<Template>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(store.create_template(new))))
}

// === Statistics ===

pub async fn statistics(State(store): State<Arc<ConsoleStore>>) -> Json<Statistics> {
    Json(store.statistics())
}

pub async fn usage_series(State(store): State<Arc<ConsoleStore>>) -> Json<Vec<UsagePoint>> {
    Json(store.usage_series())
}

pub async fn top_agents(State(store): State<Arc<ConsoleStore>>) -> Json<Vec<AgentUsage>> {
    Json(store.top_agents())
}

// === Workflows ===

pub async fn list_workflows(State(store): State<Arc<ConsoleStore>>) -> Json<Vec<Workflow>> {
    Json(store.workflows())
}

pub async fn get_workflow(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Result<Json<Workflow>, ApiError> {
    store
        .workflow(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Workflow"))
}

pub async fn create_workflow(
    State(store): State<Arc<ConsoleStore>>,
    Json(new): Json<NewWorkflow>,
) -> Result<(StatusCode, Json<Workflow>), ApiError> {
    new.validate().map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(store.create_workflow(new))))
}

pub async fn update_workflow(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
    Json(patch): Json<WorkflowPatch>,
) -> Result<Json<Workflow>, ApiError> {
    store
        .update_workflow(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("Workflow"))
}

pub async fn delete_workflow(
    State(store): State<Arc<ConsoleStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete_workflow(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Workflow"))
    }
}

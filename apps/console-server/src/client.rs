// [[AgentOS]]/apps/console-server/src/client.rs
// Purpose: Client data layer: cached fetch wrapper over the REST API.
// Architecture: Client Logic Layer
// Dependencies: reqwest, dashmap, serde_json

use crate::models::*;
use dashmap::DashMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Path-keyed response cache over the console API. Reads hit the cache
/// first; successful mutations drop every cached key under the touched
/// collections so the next read refetches. No optimistic updates.
pub struct ConsoleClient {
    http: reqwest::Client,
    base_url: String,
    cache: DashMap<String, Value>,
}

impl ConsoleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ConsoleClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: DashMap::new(),
        }
    }

    pub fn cached_keys(&self) -> Vec<String> {
        self.cache.iter().map(|e| e.key().clone()).collect()
    }

    fn invalidate(&self, prefixes: &[&str]) {
        self.cache
            .retain(|key, _| !prefixes.iter().any(|p| key.starts_with(p)));
    }

    async fn get_cached<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        if let Some(hit) = self.cache.get(path) {
            return serde_json::from_value(hit.value().clone())
                .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let value = decode(response).await?;
        self.cache.insert(path.to_string(), value.clone());
        serde_json::from_value(value)
            .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }

    async fn mutate<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        invalidates: &[&str],
    ) -> Result<T, ClientError> {
        let mut request = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let value = decode(request.send().await?).await?;

        // Only reached on success; a failed mutation leaves the cache as-is.
        self.invalidate(invalidates);
        serde_json::from_value(value)
            .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }

    async fn delete(&self, path: &str, invalidates: &[&str]) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, read_error_message(response).await));
        }
        self.invalidate(invalidates);
        Ok(())
    }

    // === Agents ===

    pub async fn agents(&self) -> Result<Vec<Agent>, ClientError> {
        self.get_cached("/api/agents").await
    }

    pub async fn agent(&self, id: &str) -> Result<Agent, ClientError> {
        self.get_cached(&format!("/api/agents/{id}")).await
    }

    pub async fn create_agent(&self, new: &NewAgent) -> Result<Agent, ClientError> {
        self.mutate(Method::POST, "/api/agents", Some(new), &["/api/agents", "/api/statistics"])
            .await
    }

    pub async fn update_agent(&self, id: &str, patch: &AgentPatch) -> Result<Agent, ClientError> {
        self.mutate(
            Method::PUT,
            &format!("/api/agents/{id}"),
            Some(patch),
            &["/api/agents", "/api/statistics"],
        )
        .await
    }

    pub async fn delete_agent(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/agents/{id}"), &["/api/agents", "/api/statistics"])
            .await
    }

    pub async fn install_template(&self, template_id: &str) -> Result<Agent, ClientError> {
        self.mutate(
            Method::POST,
            "/api/agents/from-template",
            Some(&serde_json::json!({ "templateId": template_id })),
            &["/api/agents", "/api/templates", "/api/statistics"],
        )
        .await
    }

    // === Tasks ===

    pub async fn tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.get_cached("/api/tasks").await
    }

    pub async fn task(&self, id: &str) -> Result<Task, ClientError> {
        self.get_cached(&format!("/api/tasks/{id}")).await
    }

    pub async fn create_task(&self, new: &NewTask) -> Result<Task, ClientError> {
        self.mutate(Method::POST, "/api/tasks", Some(new), &["/api/tasks", "/api/statistics"])
            .await
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ClientError> {
        self.mutate(
            Method::PUT,
            &format!("/api/tasks/{id}"),
            Some(patch),
            &["/api/tasks", "/api/statistics"],
        )
        .await
    }

    // === Messages ===

    pub async fn messages_for_task(&self, task_id: &str) -> Result<Vec<Message>, ClientError> {
        self.get_cached(&format!("/api/tasks/{task_id}/messages")).await
    }

    pub async fn create_message(&self, new: &NewMessage) -> Result<Message, ClientError> {
        self.mutate(Method::POST, "/api/messages", Some(new), &["/api/tasks"])
            .await
    }

    // === Templates ===

    pub async fn templates(&self) -> Result<Vec<Template>, ClientError> {
        self.get_cached("/api/templates").await
    }

    pub async fn template(&self, id: &str) -> Result<Template, ClientError> {
        self.get_cached(&format!("/api/templates/{id}")).await
    }

    pub async fn create_template(&self, new: &NewTemplate) -> Result<Template, ClientError> {
        self.mutate(Method::POST, "/api/templates", Some(new), &["/api/templates"])
            .await
    }

    // === Statistics ===

    pub async fn statistics(&self) -> Result<Statistics, ClientError> {
        self.get_cached("/api/statistics").await
    }

    pub async fn usage_series(&self) -> Result<Vec<UsagePoint>, ClientError> {
        self.get_cached("/api/statistics/usage").await
    }

    pub async fn top_agents(&self) -> Result<Vec<AgentUsage>, ClientError> {
        self.get_cached("/api/statistics/top-agents").await
    }

    // === Workflows ===

    pub async fn workflows(&self) -> Result<Vec<Workflow>, ClientError> {
        self.get_cached("/api/workflows").await
    }

    pub async fn workflow(&self, id: &str) -> Result<Workflow, ClientError> {
        self.get_cached(&format!("/api/workflows/{id}")).await
    }

    pub async fn create_workflow(&self, new: &NewWorkflow) -> Result<Workflow, ClientError> {
        self.mutate(Method::POST, "/api/workflows", Some(new), &["/api/workflows"])
            .await
    }

    pub async fn update_workflow(
        &self,
        id: &str,
        patch: &WorkflowPatch,
    ) -> Result<Workflow, ClientError> {
        self.mutate(
            Method::PUT,
            &format!("/api/workflows/{id}"),
            Some(patch),
            &["/api/workflows"],
        )
        .await
    }

    pub async fn delete_workflow(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/workflows/{id}"), &["/api/workflows"])
            .await
    }
}

fn api_error(status: StatusCode, message: String) -> ClientError {
    ClientError::Api { status, message }
}

async fn decode(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, read_error_message(response).await));
    }
    Ok(response.json().await?)
}

/// Pulls the `{"error": ...}` body the server attaches to failures.
async fn read_error_message(response: reqwest::Response) -> String {
    match response.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => "unknown error".to_string(),
    }
}

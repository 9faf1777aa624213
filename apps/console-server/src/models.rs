// [[AgentOS]]/apps/console-server/src/models.rs
// Purpose: Entity shapes and validation shared across store, API and client.
// Architecture: Data Model Layer
// Dependencies: Serde, Chrono

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentSource {
    #[serde(rename = "built-in")]
    BuiltIn,
    #[serde(rename = "user-created")]
    UserCreated,
    #[serde(rename = "community")]
    Community,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
    Testing,
    Archived,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// Tool identifiers an agent can be bound to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToolKind {
    #[serde(rename = "web-search")]
    WebSearch,
    #[serde(rename = "code-execution")]
    CodeExecution,
    #[serde(rename = "file-access")]
    FileAccess,
    #[serde(rename = "api-call")]
    ApiCall,
    #[serde(rename = "data-analysis")]
    DataAnalysis,
    #[serde(rename = "image-generation")]
    ImageGeneration,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::WebSearch => "web-search",
            ToolKind::CodeExecution => "code-execution",
            ToolKind::FileAccess => "file-access",
            ToolKind::ApiCall => "api-call",
            ToolKind::DataAnalysis => "data-analysis",
            ToolKind::ImageGeneration => "image-generation",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Agent,
    System,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Draft,
    Active,
    Paused,
    Archived,
}

/// Stored on every workflow but never interpreted by any engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
    Sequential,
    Parallel,
    Conditional,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub source: AgentSource,
    pub status: AgentStatus,
    pub capabilities: Vec<String>,
    pub tools: Vec<ToolKind>,
    pub input_schema: Option<Value>,
    pub output_schema: Option<Value>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub created_by: Option<String>,
    pub rating: i32,
    pub usage_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgent {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub source: AgentSource,
    #[serde(default = "default_agent_status")]
    pub status: AgentStatus,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub tools: Vec<ToolKind>,
    #[serde(default)]
    pub input_schema: Option<Value>,
    #[serde(default)]
    pub output_schema: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub rating: i32,
}

fn default_agent_status() -> AgentStatus {
    AgentStatus::Active
}

impl NewAgent {
    /// First violation wins; message is surfaced verbatim in the 400 body.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.description.trim().is_empty() {
            return Err("description must not be empty".into());
        }
        if self.system_prompt.trim().is_empty() {
            return Err("systemPrompt must not be empty".into());
        }
        if !(0..=5).contains(&self.rating) {
            return Err("rating must be between 0 and 5".into());
        }
        Ok(())
    }
}

/// Shallow-merge update. Absent fields leave the record untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub system_prompt: Option<String>,
    pub source: Option<AgentSource>,
    pub status: Option<AgentStatus>,
    pub capabilities: Option<Vec<String>>,
    pub tools: Option<Vec<ToolKind>>,
    pub input_schema: Option<Value>,
    pub output_schema: Option<Value>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub created_by: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub agent_ids: Vec<String>,
    pub workflow: Option<Value>,
    pub input: Option<Value>,
    pub output: Option<Value>,
    pub progress: i32,
    pub execution_time: Option<i64>,
    pub cost: i64,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_task_status")]
    pub status: TaskStatus,
    pub agent_ids: Vec<String>,
    #[serde(default)]
    pub workflow: Option<Value>,
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub progress: i32,
    #[serde(default)]
    pub execution_time: Option<i64>,
    #[serde(default)]
    pub cost: i64,
}

fn default_task_status() -> TaskStatus {
    TaskStatus::Pending
}

impl NewTask {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".into());
        }
        if !(0..=100).contains(&self.progress) {
            return Err("progress must be between 0 and 100".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub agent_ids: Option<Vec<String>>,
    pub workflow: Option<Value>,
    pub input: Option<Value>,
    pub output: Option<Value>,
    pub progress: Option<i32>,
    pub execution_time: Option<i64>,
    pub cost: Option<i64>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub task_id: String,
    pub agent_id: Option<String>,
    pub role: MessageRole,
    pub content: String,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub task_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), String> {
        if self.task_id.trim().is_empty() {
            return Err("taskId must not be empty".into());
        }
        if self.content.trim().is_empty() {
            return Err("content must not be empty".into());
        }
        Ok(())
    }
}

/// The partial agent shape a template stamps into a new agent on install.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateAgentConfig {
    pub system_prompt: Option<String>,
    pub tools: Vec<ToolKind>,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub agent_config: TemplateAgentConfig,
    pub icon: Option<String>,
    pub downloads: i64,
    pub rating: i32,
    pub created_by: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub agent_config: TemplateAgentConfig,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub rating: i32,
    pub created_by: String,
    #[serde(default)]
    pub featured: bool,
}

impl NewTemplate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.description.trim().is_empty() {
            return Err("description must not be empty".into());
        }
        if self.category.trim().is_empty() {
            return Err("category must not be empty".into());
        }
        if self.created_by.trim().is_empty() {
            return Err("createdBy must not be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    pub agent_id: String,
    pub order: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub execution_type: ExecutionType,
    pub status: WorkflowStatus,
    pub nodes: Vec<WorkflowNode>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_execution_type")]
    pub execution_type: ExecutionType,
    #[serde(default = "default_workflow_status")]
    pub status: WorkflowStatus,
    /// Stored verbatim. Agent-id existence and order contiguity are NOT
    /// checked server-side; the builder renumbers before submission.
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub created_by: Option<String>,
}

fn default_execution_type() -> ExecutionType {
    ExecutionType::Sequential
}

fn default_workflow_status() -> WorkflowStatus {
    WorkflowStatus::Draft
}

impl NewWorkflow {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub execution_type: Option<ExecutionType>,
    pub status: Option<WorkflowStatus>,
    pub nodes: Option<Vec<WorkflowNode>>,
    pub created_by: Option<String>,
}

// === Aggregates ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_agents: usize,
    pub active_agents: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub failed_tasks: usize,
    pub total_cost: i64,
    pub avg_execution_time: i64,
    pub api_calls: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePoint {
    pub date: String,
    pub api_calls: u32,
    pub cost: u32,
    pub tasks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentUsage {
    pub agent_id: String,
    pub agent_name: String,
    pub usage_count: i64,
    pub success_rate: u32,
    pub avg_execution_time: u32,
    pub total_cost: u32,
}

/// Catalog entry for the chat simulator's model picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
    pub context_window: u32,
    pub cost_per_1k_tokens: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_source_wire_names() {
        assert_eq!(
            serde_json::to_string(&AgentSource::BuiltIn).unwrap(),
            "\"built-in\""
        );
        assert_eq!(
            serde_json::to_string(&ToolKind::WebSearch).unwrap(),
            "\"web-search\""
        );
    }

    #[test]
    fn new_agent_rejects_blank_prompt() {
        let body = serde_json::json!({
            "name": "A",
            "description": "B",
            "systemPrompt": "   ",
            "source": "user-created",
        });
        let agent: NewAgent = serde_json::from_value(body).unwrap();
        assert_eq!(
            agent.validate().unwrap_err(),
            "systemPrompt must not be empty"
        );
    }

    #[test]
    fn new_agent_defaults_apply() {
        let body = serde_json::json!({
            "name": "A",
            "description": "B",
            "systemPrompt": "C",
            "source": "community",
        });
        let agent: NewAgent = serde_json::from_value(body).unwrap();
        assert_eq!(agent.status, AgentStatus::Active);
        assert!(agent.tools.is_empty());
        assert!(agent.validate().is_ok());
    }

    #[test]
    fn new_message_rejects_whitespace_only_content() {
        let body = serde_json::json!({
            "taskId": "task1",
            "role": "user",
            "content": "   \n\t",
        });
        let message: NewMessage = serde_json::from_value(body).unwrap();
        assert_eq!(
            message.validate().unwrap_err(),
            "content must not be empty"
        );
    }

    #[test]
    fn patch_deserializes_partially() {
        let patch: AgentPatch =
            serde_json::from_value(serde_json::json!({"status": "archived"})).unwrap();
        assert_eq!(patch.status, Some(AgentStatus::Archived));
        assert!(patch.name.is_none());
    }
}

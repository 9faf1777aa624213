// [[AgentOS]]/apps/console-server/src/builder.rs
// Purpose: Form-side editing logic: workflow node list and agent builder.
// Architecture: Client Logic Layer
// Dependencies: Serde, thiserror, uuid

use crate::models::*;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("Please add at least one agent to the workflow.")]
    NoAgents,
    #[error("Workflow name is required.")]
    MissingName,
    #[error("Agent is already part of the workflow.")]
    DuplicateAgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Local ordered node list edited before the whole workflow is submitted in
/// one request. Every mutation renumbers `order` to match list position.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDraft {
    pub name: String,
    pub description: Option<String>,
    pub execution_type: Option<ExecutionType>,
    pub status: Option<WorkflowStatus>,
    pub created_by: Option<String>,
    nodes: Vec<WorkflowNode>,
}

impl WorkflowDraft {
    pub fn new(name: impl Into<String>) -> Self {
        WorkflowDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Load an existing workflow for editing.
    pub fn from_workflow(workflow: &Workflow) -> Self {
        let mut draft = WorkflowDraft {
            name: workflow.name.clone(),
            description: workflow.description.clone(),
            execution_type: Some(workflow.execution_type),
            status: Some(workflow.status),
            created_by: workflow.created_by.clone(),
            nodes: workflow.nodes.clone(),
        };
        draft.renumber();
        draft
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    /// Agent ids still offered by the add-agent dropdown.
    pub fn available_agents<'a>(&self, agents: &'a [Agent]) -> Vec<&'a Agent> {
        agents
            .iter()
            .filter(|a| !self.nodes.iter().any(|n| n.agent_id == a.id))
            .collect()
    }

    /// Appends a node for the given agent at the end of the list.
    pub fn add_agent(&mut self, agent_id: &str) -> Result<&WorkflowNode, DraftError> {
        if self.nodes.iter().any(|n| n.agent_id == agent_id) {
            return Err(DraftError::DuplicateAgent);
        }
        self.nodes.push(WorkflowNode {
            id: format!("node-{}", Uuid::new_v4()),
            agent_id: agent_id.to_string(),
            order: self.nodes.len(),
        });
        Ok(self.nodes.last().expect("node just pushed"))
    }

    pub fn remove_node(&mut self, node_id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != node_id);
        let removed = self.nodes.len() != before;
        if removed {
            self.renumber();
        }
        removed
    }

    /// Swaps the node at `index` with its neighbor. No-op at the edges.
    pub fn move_node(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => {
                if index == 0 || index >= self.nodes.len() {
                    return false;
                }
                index - 1
            }
            MoveDirection::Down => {
                if index + 1 >= self.nodes.len() {
                    return false;
                }
                index + 1
            }
        };
        self.nodes.swap(index, target);
        self.renumber();
        true
    }

    fn renumber(&mut self) {
        for (idx, node) in self.nodes.iter_mut().enumerate() {
            node.order = idx;
        }
    }

    /// Client-side submit check: a workflow needs a name and at least one
    /// node. The server itself does not enforce the node count.
    pub fn submit(&self) -> Result<NewWorkflow, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.nodes.is_empty() {
            return Err(DraftError::NoAgents);
        }
        Ok(NewWorkflow {
            name: self.name.clone(),
            description: self.description.clone(),
            execution_type: self.execution_type.unwrap_or(ExecutionType::Sequential),
            status: self.status.unwrap_or(WorkflowStatus::Draft),
            nodes: self.nodes.clone(),
            created_by: self.created_by.clone(),
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be at least {1} characters")]
    TooShort(&'static str, usize),
    #[error("{0} must be valid JSON")]
    BadJson(&'static str),
}

/// Raw text fields from the agent builder form. `build` runs the local
/// validation pass and parses the schema textareas before anything goes
/// over the wire.
#[derive(Debug, Clone, Default)]
pub struct AgentForm {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub category: String,
    pub icon: String,
    pub capabilities: Vec<String>,
    pub tools: Vec<ToolKind>,
    pub input_schema_text: String,
    pub output_schema_text: String,
}

impl AgentForm {
    pub fn build(&self) -> Result<NewAgent, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        if self.description.trim().len() < 10 {
            return Err(FormError::TooShort("description", 10));
        }
        if self.system_prompt.trim().len() < 20 {
            return Err(FormError::TooShort("systemPrompt", 20));
        }

        let input_schema = parse_schema_text("inputSchema", &self.input_schema_text)?;
        let output_schema = parse_schema_text("outputSchema", &self.output_schema_text)?;

        Ok(NewAgent {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            system_prompt: self.system_prompt.trim().to_string(),
            source: AgentSource::UserCreated,
            status: AgentStatus::Testing,
            capabilities: self.capabilities.clone(),
            tools: self.tools.clone(),
            input_schema,
            output_schema,
            category: non_empty(&self.category),
            icon: non_empty(&self.icon),
            created_by: None,
            rating: 0,
        })
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_schema_text(field: &'static str, raw: &str) -> Result<Option<Value>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|_| FormError::BadJson(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_rejected_on_submit() {
        let draft = WorkflowDraft::new("Lead Pipeline");
        assert_eq!(draft.submit().unwrap_err(), DraftError::NoAgents);
    }

    #[test]
    fn add_renumbers_sequentially() {
        let mut draft = WorkflowDraft::new("Pipeline");
        draft.add_agent("a").unwrap();
        draft.add_agent("b").unwrap();
        draft.add_agent("c").unwrap();

        let orders: Vec<usize> = draft.nodes().iter().map(|n| n.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_agent_rejected() {
        let mut draft = WorkflowDraft::new("Pipeline");
        draft.add_agent("a").unwrap();
        assert_eq!(draft.add_agent("a").unwrap_err(), DraftError::DuplicateAgent);
    }

    #[test]
    fn move_swaps_exactly_two_orders() {
        let mut draft = WorkflowDraft::new("Pipeline");
        for agent in ["a", "b", "c", "d"] {
            draft.add_agent(agent).unwrap();
        }
        let before: Vec<(String, usize)> = draft
            .nodes()
            .iter()
            .map(|n| (n.agent_id.clone(), n.order))
            .collect();

        assert!(draft.move_node(1, MoveDirection::Down));

        let after: Vec<(String, usize)> = draft
            .nodes()
            .iter()
            .map(|n| (n.agent_id.clone(), n.order))
            .collect();

        // b and c swapped positions, a and d untouched.
        assert_eq!(
            after.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c", "b", "d"]
        );
        assert_eq!(after[0], before[0]);
        assert_eq!(after[3], before[3]);
        assert_eq!(
            after.iter().map(|(_, o)| *o).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn move_is_noop_at_edges() {
        let mut draft = WorkflowDraft::new("Pipeline");
        draft.add_agent("a").unwrap();
        draft.add_agent("b").unwrap();

        assert!(!draft.move_node(0, MoveDirection::Up));
        assert!(!draft.move_node(1, MoveDirection::Down));
        assert_eq!(draft.nodes()[0].agent_id, "a");
    }

    #[test]
    fn remove_closes_order_gap() {
        let mut draft = WorkflowDraft::new("Pipeline");
        for agent in ["a", "b", "c"] {
            draft.add_agent(agent).unwrap();
        }
        let node_id = draft.nodes()[1].id.clone();
        assert!(draft.remove_node(&node_id));
        assert!(!draft.remove_node(&node_id));

        let orders: Vec<usize> = draft.nodes().iter().map(|n| n.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(draft.nodes()[1].agent_id, "c");
    }

    #[test]
    fn dropdown_excludes_included_agents() {
        let store = crate::store::ConsoleStore::seeded();
        let agents = store.agents();
        let mut draft = WorkflowDraft::new("Pipeline");
        draft.add_agent(&agents[0].id).unwrap();

        let available = draft.available_agents(&agents);
        assert_eq!(available.len(), agents.len() - 1);
        assert!(available.iter().all(|a| a.id != agents[0].id));
    }

    #[test]
    fn agent_form_rejects_malformed_schema_text() {
        let form = AgentForm {
            name: "Reviewer".into(),
            description: "Reviews incoming pull requests".into(),
            system_prompt: "You are a meticulous code review agent.".into(),
            input_schema_text: "{not json".into(),
            ..Default::default()
        };
        assert_eq!(form.build().unwrap_err(), FormError::BadJson("inputSchema"));
    }

    #[test]
    fn agent_form_builds_new_agent() {
        let form = AgentForm {
            name: "Reviewer".into(),
            description: "Reviews incoming pull requests".into(),
            system_prompt: "You are a meticulous code review agent.".into(),
            category: "Development".into(),
            tools: vec![ToolKind::CodeExecution],
            input_schema_text: r#"{"type": "object"}"#.into(),
            ..Default::default()
        };
        let new = form.build().unwrap();
        assert_eq!(new.source, AgentSource::UserCreated);
        assert_eq!(new.status, AgentStatus::Testing);
        assert_eq!(new.category.as_deref(), Some("Development"));
        assert!(new.input_schema.is_some());
        assert!(new.output_schema.is_none());
    }

    #[test]
    fn agent_form_minimum_lengths() {
        let form = AgentForm {
            name: "X".into(),
            description: "too short".into(),
            system_prompt: "You are a meticulous code review agent.".into(),
            ..Default::default()
        };
        assert_eq!(
            form.build().unwrap_err(),
            FormError::TooShort("description", 10)
        );
    }
}

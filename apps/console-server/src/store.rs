// [[AgentOS]]/apps/console-server/src/store.rs
// Purpose: In-memory repository for all console entities plus aggregates.
// Architecture: Storage Layer
// Dependencies: dashmap, chrono, uuid, rand

use crate::models::*;
use crate::seed;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Single-process store. One map per entity, last-write-wins, no
/// referential integrity: deleting an agent leaves any workflow node or
/// task that references it dangling.
pub struct ConsoleStore {
    agents: DashMap<String, Agent>,
    tasks: DashMap<String, Task>,
    // Messages keep an insertion sequence so creation order survives
    // timestamp ties.
    messages: DashMap<String, (u64, Message)>,
    message_seq: AtomicU64,
    templates: DashMap<String, Template>,
    workflows: DashMap<String, Workflow>,
}

impl ConsoleStore {
    /// Empty store, no fixtures. Tests that need a clean slate start here.
    pub fn empty() -> Self {
        ConsoleStore {
            agents: DashMap::new(),
            tasks: DashMap::new(),
            messages: DashMap::new(),
            message_seq: AtomicU64::new(0),
            templates: DashMap::new(),
            workflows: DashMap::new(),
        }
    }

    /// Store pre-loaded with the fixed sample catalog. State resets to this
    /// seed on every process start.
    pub fn seeded() -> Self {
        let store = Self::empty();
        seed::install(&store);
        store
    }

    // Fixture inserts keep their fixed ids so seeded cross-references
    // (task.agent_ids) stay valid.

    pub(crate) fn insert_agent_fixture(&self, agent: Agent) {
        self.agents.insert(agent.id.clone(), agent);
    }

    pub(crate) fn insert_template_fixture(&self, template: Template) {
        self.templates.insert(template.id.clone(), template);
    }

    pub(crate) fn insert_task_fixture(&self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    // === Agents ===

    pub fn agents(&self) -> Vec<Agent> {
        self.agents.iter().map(|e| e.value().clone()).collect()
    }

    pub fn agent(&self, id: &str) -> Option<Agent> {
        self.agents.get(id).map(|a| a.clone())
    }

    pub fn create_agent(&self, new: NewAgent) -> Agent {
        let now = Utc::now();
        let agent = Agent {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            system_prompt: new.system_prompt,
            source: new.source,
            status: new.status,
            capabilities: new.capabilities,
            tools: new.tools,
            input_schema: new.input_schema,
            output_schema: new.output_schema,
            category: new.category,
            icon: new.icon,
            created_by: new.created_by,
            rating: new.rating,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.agents.insert(agent.id.clone(), agent.clone());
        agent
    }

    pub fn update_agent(&self, id: &str, patch: AgentPatch) -> Option<Agent> {
        let mut entry = self.agents.get_mut(id)?;
        let agent = entry.value_mut();
        if let Some(name) = patch.name {
            agent.name = name;
        }
        if let Some(description) = patch.description {
            agent.description = description;
        }
        if let Some(prompt) = patch.system_prompt {
            agent.system_prompt = prompt;
        }
        if let Some(source) = patch.source {
            agent.source = source;
        }
        if let Some(status) = patch.status {
            agent.status = status;
        }
        if let Some(capabilities) = patch.capabilities {
            agent.capabilities = capabilities;
        }
        if let Some(tools) = patch.tools {
            agent.tools = tools;
        }
        if let Some(schema) = patch.input_schema {
            agent.input_schema = Some(schema);
        }
        if let Some(schema) = patch.output_schema {
            agent.output_schema = Some(schema);
        }
        if let Some(category) = patch.category {
            agent.category = Some(category);
        }
        if let Some(icon) = patch.icon {
            agent.icon = Some(icon);
        }
        if let Some(created_by) = patch.created_by {
            agent.created_by = Some(created_by);
        }
        if let Some(rating) = patch.rating {
            agent.rating = rating;
        }
        agent.updated_at = Utc::now();
        Some(agent.clone())
    }

    pub fn delete_agent(&self, id: &str) -> bool {
        self.agents.remove(id).is_some()
    }

    // === Tasks ===

    /// Newest first.
    pub fn tasks(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.iter().map(|e| e.value().clone()).collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tasks
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.tasks.get(id).map(|t| t.clone())
    }

    pub fn create_task(&self, new: NewTask) -> Task {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            status: new.status,
            agent_ids: new.agent_ids,
            workflow: new.workflow,
            input: new.input,
            output: new.output,
            progress: new.progress,
            execution_time: new.execution_time,
            cost: new.cost,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.tasks.insert(task.id.clone(), task.clone());
        task
    }

    pub fn update_task(&self, id: &str, patch: TaskPatch) -> Option<Task> {
        let mut entry = self.tasks.get_mut(id)?;
        let task = entry.value_mut();
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(agent_ids) = patch.agent_ids {
            task.agent_ids = agent_ids;
        }
        if let Some(workflow) = patch.workflow {
            task.workflow = Some(workflow);
        }
        if let Some(input) = patch.input {
            task.input = Some(input);
        }
        if let Some(output) = patch.output {
            task.output = Some(output);
        }
        if let Some(progress) = patch.progress {
            task.progress = progress;
        }
        if let Some(execution_time) = patch.execution_time {
            task.execution_time = Some(execution_time);
        }
        if let Some(cost) = patch.cost {
            task.cost = cost;
        }
        if let Some(completed_at) = patch.completed_at {
            task.completed_at = Some(completed_at);
        }
        Some(task.clone())
    }

    // === Messages ===

    pub fn create_message(&self, new: NewMessage) -> Message {
        let message = Message {
            id: Uuid::new_v4().to_string(),
            task_id: new.task_id,
            agent_id: new.agent_id,
            role: new.role,
            content: new.content,
            metadata: new.metadata,
            created_at: Utc::now(),
        };
        let seq = self.message_seq.fetch_add(1, Ordering::Relaxed);
        self.messages
            .insert(message.id.clone(), (seq, message.clone()));
        message
    }

    /// Messages for one task, in creation order.
    pub fn messages_for_task(&self, task_id: &str) -> Vec<Message> {
        let mut rows: Vec<(u64, Message)> = self
            .messages
            .iter()
            .filter(|e| e.value().1.task_id == task_id)
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, msg)| msg).collect()
    }

    // === Templates ===

    /// Featured templates first, then by descending downloads.
    pub fn templates(&self) -> Vec<Template> {
        let mut templates: Vec<Template> =
            self.templates.iter().map(|e| e.value().clone()).collect();
        templates.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(b.downloads.cmp(&a.downloads))
        });
        templates
    }

    pub fn template(&self, id: &str) -> Option<Template> {
        self.templates.get(id).map(|t| t.clone())
    }

    pub fn create_template(&self, new: NewTemplate) -> Template {
        let template = Template {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            category: new.category,
            agent_config: new.agent_config,
            icon: new.icon,
            downloads: 0,
            rating: new.rating,
            created_by: new.created_by,
            featured: new.featured,
            created_at: Utc::now(),
        };
        self.templates.insert(template.id.clone(), template.clone());
        template
    }

    pub fn increment_template_downloads(&self, id: &str) -> bool {
        match self.templates.get_mut(id) {
            Some(mut template) => {
                template.downloads += 1;
                true
            }
            None => false,
        }
    }

    // === Workflows ===

    pub fn workflows(&self) -> Vec<Workflow> {
        self.workflows.iter().map(|e| e.value().clone()).collect()
    }

    pub fn workflow(&self, id: &str) -> Option<Workflow> {
        self.workflows.get(id).map(|w| w.clone())
    }

    pub fn create_workflow(&self, new: NewWorkflow) -> Workflow {
        let now = Utc::now();
        let workflow = Workflow {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            execution_type: new.execution_type,
            status: new.status,
            nodes: new.nodes,
            created_by: new.created_by,
            created_at: now,
            updated_at: now,
        };
        self.workflows.insert(workflow.id.clone(), workflow.clone());
        workflow
    }

    pub fn update_workflow(&self, id: &str, patch: WorkflowPatch) -> Option<Workflow> {
        let mut entry = self.workflows.get_mut(id)?;
        let workflow = entry.value_mut();
        if let Some(name) = patch.name {
            workflow.name = name;
        }
        if let Some(description) = patch.description {
            workflow.description = Some(description);
        }
        if let Some(execution_type) = patch.execution_type {
            workflow.execution_type = execution_type;
        }
        if let Some(status) = patch.status {
            workflow.status = status;
        }
        if let Some(nodes) = patch.nodes {
            workflow.nodes = nodes;
        }
        if let Some(created_by) = patch.created_by {
            workflow.created_by = Some(created_by);
        }
        workflow.updated_at = Utc::now();
        Some(workflow.clone())
    }

    pub fn delete_workflow(&self, id: &str) -> bool {
        self.workflows.remove(id).is_some()
    }

    // === Aggregates ===

    pub fn statistics(&self) -> Statistics {
        let agents = self.agents();
        let tasks = self.tasks();

        let execution_times: Vec<i64> =
            tasks.iter().filter_map(|t| t.execution_time).collect();
        let avg_execution_time = if execution_times.is_empty() {
            0
        } else {
            execution_times.iter().sum::<i64>() / execution_times.len() as i64
        };

        Statistics {
            total_agents: agents.len(),
            active_agents: agents
                .iter()
                .filter(|a| a.status == AgentStatus::Active)
                .count(),
            total_tasks: tasks.len(),
            completed_tasks: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            failed_tasks: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Failed)
                .count(),
            total_cost: tasks.iter().map(|t| t.cost).sum(),
            avg_execution_time,
            // Rough estimate: three upstream calls per task.
            api_calls: tasks.len() * 3,
        }
    }

    /// Synthetic usage for the past 7 days, oldest first.
    pub fn usage_series(&self) -> Vec<UsagePoint> {
        let mut rng = rand::thread_rng();
        let today = Utc::now().date_naive();
        (0..7)
            .rev()
            .map(|days_back| UsagePoint {
                date: (today - Duration::days(days_back))
                    .format("%Y-%m-%d")
                    .to_string(),
                api_calls: rng.gen_range(200..700),
                cost: rng.gen_range(20..70),
                tasks: rng.gen_range(10..40),
            })
            .collect()
    }

    /// Top 5 agents by usage count. Success rate, latency and cost are
    /// synthesized fresh on every call rather than derived from task
    /// history.
    pub fn top_agents(&self) -> Vec<AgentUsage> {
        let mut rng = rand::thread_rng();
        let mut agents: Vec<Agent> = self
            .agents()
            .into_iter()
            .filter(|a| a.usage_count > 0)
            .collect();
        agents.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
        agents
            .into_iter()
            .take(5)
            .map(|agent| AgentUsage {
                agent_id: agent.id,
                agent_name: agent.name,
                usage_count: agent.usage_count,
                success_rate: rng.gen_range(80..100),
                avg_execution_time: rng.gen_range(500..2500),
                total_cost: rng.gen_range(50..150),
            })
            .collect()
    }
}

// [[AgentOS]]/apps/console-server/src/seed.rs
// Purpose: Fixed sample catalog installed into the store at process start.
// Architecture: Storage Layer
// Dependencies: chrono

use crate::models::*;
use crate::store::ConsoleStore;
use chrono::{DateTime, Utc};

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid fixture timestamp")
}

/// Installs the sample agents, templates and tasks. Process state resets to
/// exactly this catalog on every restart.
pub fn install(store: &ConsoleStore) {
    for agent in sample_agents() {
        store.insert_agent_fixture(agent);
    }
    for template in sample_templates() {
        store.insert_template_fixture(template);
    }
    for task in sample_tasks() {
        store.insert_task_fixture(task);
    }
}

fn sample_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1".into(),
            name: "Customer Support Pro".into(),
            description: "Intelligent customer support agent that handles inquiries, troubleshooting, and ticket management with empathy and efficiency.".into(),
            system_prompt: "You are a professional customer support agent. Your goal is to help customers resolve their issues quickly and professionally. Always be empathetic, patient, and thorough in your responses.".into(),
            source: AgentSource::BuiltIn,
            status: AgentStatus::Active,
            capabilities: vec!["customer-service".into(), "troubleshooting".into(), "ticket-management".into()],
            tools: vec![ToolKind::WebSearch, ToolKind::ApiCall],
            input_schema: None,
            output_schema: None,
            category: Some("Support".into()),
            icon: Some("CS".into()),
            created_by: Some("AgentOS".into()),
            rating: 5,
            usage_count: 245,
            created_at: ts("2024-01-15T00:00:00Z"),
            updated_at: ts("2024-01-15T00:00:00Z"),
        },
        Agent {
            id: "2".into(),
            name: "Data Analyst".into(),
            description: "Advanced data analysis agent that processes datasets, generates insights, and creates visualizations from complex data.".into(),
            system_prompt: "You are an expert data analyst. Analyze data thoroughly, identify patterns and trends, and provide actionable insights. Use statistical methods and create clear visualizations.".into(),
            source: AgentSource::BuiltIn,
            status: AgentStatus::Active,
            capabilities: vec!["data-analysis".into(), "statistics".into(), "visualization".into()],
            tools: vec![ToolKind::DataAnalysis, ToolKind::CodeExecution],
            input_schema: None,
            output_schema: None,
            category: Some("Analytics".into()),
            icon: Some("DA".into()),
            created_by: Some("AgentOS".into()),
            rating: 5,
            usage_count: 189,
            created_at: ts("2024-01-10T00:00:00Z"),
            updated_at: ts("2024-01-10T00:00:00Z"),
        },
        Agent {
            id: "3".into(),
            name: "Sales Assistant".into(),
            description: "AI-powered sales agent that qualifies leads, schedules meetings, and provides product recommendations based on customer needs.".into(),
            system_prompt: "You are a sales assistant focused on helping customers find the right solutions. Ask qualifying questions, understand needs, and recommend appropriate products or services.".into(),
            source: AgentSource::Community,
            status: AgentStatus::Active,
            capabilities: vec!["lead-qualification".into(), "product-recommendation".into()],
            tools: vec![ToolKind::WebSearch, ToolKind::ApiCall],
            input_schema: None,
            output_schema: None,
            category: Some("Sales".into()),
            icon: Some("SA".into()),
            created_by: Some("SalesTeam".into()),
            rating: 4,
            usage_count: 167,
            created_at: ts("2024-02-01T00:00:00Z"),
            updated_at: ts("2024-02-01T00:00:00Z"),
        },
        Agent {
            id: "4".into(),
            name: "Code Reviewer".into(),
            description: "Automated code review agent that analyzes code quality, identifies bugs, suggests improvements, and enforces best practices.".into(),
            system_prompt: "You are an experienced code reviewer. Analyze code for bugs, security issues, performance problems, and adherence to best practices. Provide constructive feedback.".into(),
            source: AgentSource::UserCreated,
            status: AgentStatus::Testing,
            capabilities: vec!["code-review".into(), "security-analysis".into()],
            tools: vec![ToolKind::CodeExecution, ToolKind::FileAccess],
            input_schema: None,
            output_schema: None,
            category: Some("Development".into()),
            icon: Some("CR".into()),
            created_by: Some("DevTeam".into()),
            rating: 4,
            usage_count: 92,
            created_at: ts("2024-02-10T00:00:00Z"),
            updated_at: ts("2024-02-10T00:00:00Z"),
        },
    ]
}

fn sample_templates() -> Vec<Template> {
    vec![
        Template {
            id: "t1".into(),
            name: "Email Marketing Assistant".into(),
            description: "Create engaging email campaigns, write compelling subject lines, and optimize for conversions. Perfect for marketing teams.".into(),
            category: "Marketing".into(),
            agent_config: TemplateAgentConfig {
                system_prompt: Some("You are an email marketing expert. Create compelling email content that drives engagement and conversions.".into()),
                tools: vec![ToolKind::WebSearch, ToolKind::ApiCall],
                capabilities: vec!["email-writing".into(), "copywriting".into()],
            },
            icon: Some("EM".into()),
            downloads: 1240,
            rating: 5,
            created_by: "Marketing Pro".into(),
            featured: true,
            created_at: ts("2024-01-05T00:00:00Z"),
        },
        Template {
            id: "t2".into(),
            name: "Meeting Scheduler".into(),
            description: "Intelligent scheduling agent that finds optimal meeting times, sends invites, and manages calendar conflicts automatically.".into(),
            category: "Operations".into(),
            agent_config: TemplateAgentConfig {
                system_prompt: Some("You help schedule meetings efficiently by finding optimal times and managing calendars.".into()),
                tools: vec![ToolKind::ApiCall],
                capabilities: vec!["scheduling".into(), "calendar-management".into()],
            },
            icon: Some("MS".into()),
            downloads: 987,
            rating: 5,
            created_by: "ProductivityHub".into(),
            featured: true,
            created_at: ts("2024-01-08T00:00:00Z"),
        },
        Template {
            id: "t3".into(),
            name: "Content Moderator".into(),
            description: "Automated content moderation for user-generated content, detecting inappropriate material and ensuring community guidelines compliance.".into(),
            category: "Support".into(),
            agent_config: TemplateAgentConfig {
                system_prompt: Some("You moderate content to ensure it follows community guidelines and is appropriate.".into()),
                tools: vec![ToolKind::WebSearch],
                capabilities: vec!["content-moderation".into(), "safety".into()],
            },
            icon: Some("CM".into()),
            downloads: 756,
            rating: 4,
            created_by: "SafetyFirst".into(),
            featured: false,
            created_at: ts("2024-01-12T00:00:00Z"),
        },
        Template {
            id: "t4".into(),
            name: "Research Assistant".into(),
            description: "Comprehensive research agent that gathers information, summarizes findings, and provides cited sources for academic or business research.".into(),
            category: "Analytics".into(),
            agent_config: TemplateAgentConfig {
                system_prompt: Some("You are a research assistant that helps gather, analyze, and summarize information from various sources.".into()),
                tools: vec![ToolKind::WebSearch, ToolKind::FileAccess],
                capabilities: vec!["research".into(), "summarization".into()],
            },
            icon: Some("RA".into()),
            downloads: 654,
            rating: 5,
            created_by: "ResearchLab".into(),
            featured: false,
            created_at: ts("2024-01-20T00:00:00Z"),
        },
        Template {
            id: "t5".into(),
            name: "Social Media Manager".into(),
            description: "Manage social media presence with automated posting, engagement tracking, and content suggestions tailored to your audience.".into(),
            category: "Marketing".into(),
            agent_config: TemplateAgentConfig {
                system_prompt: Some("You manage social media content and engagement, creating posts that resonate with the target audience.".into()),
                tools: vec![ToolKind::WebSearch, ToolKind::ApiCall, ToolKind::ImageGeneration],
                capabilities: vec!["social-media".into(), "content-creation".into()],
            },
            icon: Some("SM".into()),
            downloads: 543,
            rating: 4,
            created_by: "SocialGuru".into(),
            featured: false,
            created_at: ts("2024-02-01T00:00:00Z"),
        },
        Template {
            id: "t6".into(),
            name: "Bug Triage Agent".into(),
            description: "Automatically categorize and prioritize bug reports, assign severity levels, and route to appropriate teams for faster resolution.".into(),
            category: "Development".into(),
            agent_config: TemplateAgentConfig {
                system_prompt: Some("You triage bug reports by analyzing severity, impact, and priority to help development teams respond efficiently.".into()),
                tools: vec![ToolKind::CodeExecution, ToolKind::ApiCall],
                capabilities: vec!["bug-triage".into(), "prioritization".into()],
            },
            icon: Some("BT".into()),
            downloads: 432,
            rating: 4,
            created_by: "DevOps Team".into(),
            featured: false,
            created_at: ts("2024-02-05T00:00:00Z"),
        },
    ]
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task1".into(),
            title: "Customer Inquiry - Product Features".into(),
            description: Some("Help customer understand premium plan features".into()),
            status: TaskStatus::Completed,
            agent_ids: vec!["1".into()],
            workflow: None,
            input: None,
            output: None,
            progress: 100,
            execution_time: Some(2340),
            cost: 15,
            created_at: ts("2024-02-20T10:30:00Z"),
            completed_at: Some(ts("2024-02-20T10:32:20Z")),
        },
        Task {
            id: "task2".into(),
            title: "Sales Data Analysis Q1 2024".into(),
            description: Some("Analyze quarterly sales performance and trends".into()),
            status: TaskStatus::Completed,
            agent_ids: vec!["2".into()],
            workflow: None,
            input: None,
            output: None,
            progress: 100,
            execution_time: Some(5670),
            cost: 42,
            created_at: ts("2024-02-19T14:15:00Z"),
            completed_at: Some(ts("2024-02-19T14:20:40Z")),
        },
        Task {
            id: "task3".into(),
            title: "Lead Qualification - Enterprise Client".into(),
            description: Some("Qualify new enterprise lead from contact form".into()),
            status: TaskStatus::Running,
            agent_ids: vec!["3".into()],
            workflow: None,
            input: None,
            output: None,
            progress: 65,
            execution_time: None,
            cost: 8,
            created_at: ts("2024-02-21T09:00:00Z"),
            completed_at: None,
        },
        Task {
            id: "task4".into(),
            title: "Code Review - Authentication Module".into(),
            description: Some("Review pull request for new auth implementation".into()),
            status: TaskStatus::Pending,
            agent_ids: vec!["4".into()],
            workflow: None,
            input: None,
            output: None,
            progress: 0,
            execution_time: None,
            cost: 0,
            created_at: ts("2024-02-21T11:30:00Z"),
            completed_at: None,
        },
    ]
}

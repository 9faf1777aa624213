// [[AgentOS]]/apps/console-server/src/simulate.rs
// Purpose: Local canned "execution" for the chat and task screens.
// Architecture: Client Logic Layer
// Dependencies: tokio, rand

use crate::models::{Agent, MessageRole, ModelInfo, NewMessage};
use rand::Rng;
use serde_json::json;
use std::time::Duration;

/// Fixed think-time before every synthesized reply.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// The model picker catalog. None of these are ever called.
pub fn model_catalog() -> &'static [ModelInfo] {
    &[
        ModelInfo {
            id: "gpt-4-turbo",
            name: "GPT-4 Turbo",
            provider: "OpenAI",
            description: "Most capable model, best for complex tasks",
            context_window: 128_000,
            cost_per_1k_tokens: 0.03,
        },
        ModelInfo {
            id: "gpt-4",
            name: "GPT-4",
            provider: "OpenAI",
            description: "Advanced reasoning and creativity",
            context_window: 8192,
            cost_per_1k_tokens: 0.06,
        },
        ModelInfo {
            id: "gpt-3.5-turbo",
            name: "GPT-3.5 Turbo",
            provider: "OpenAI",
            description: "Fast and efficient for most tasks",
            context_window: 16_384,
            cost_per_1k_tokens: 0.002,
        },
        ModelInfo {
            id: "claude-3.5-sonnet",
            name: "Claude 3.5 Sonnet",
            provider: "Anthropic",
            description: "Best balance of intelligence and speed",
            context_window: 200_000,
            cost_per_1k_tokens: 0.015,
        },
        ModelInfo {
            id: "claude-3-opus",
            name: "Claude 3 Opus",
            provider: "Anthropic",
            description: "Most intelligent Claude model",
            context_window: 200_000,
            cost_per_1k_tokens: 0.075,
        },
        ModelInfo {
            id: "claude-3-haiku",
            name: "Claude 3 Haiku",
            provider: "Anthropic",
            description: "Fastest Claude model",
            context_window: 200_000,
            cost_per_1k_tokens: 0.00125,
        },
        ModelInfo {
            id: "gemini-pro",
            name: "Gemini Pro",
            provider: "Google",
            description: "Google's most capable AI model",
            context_window: 32_768,
            cost_per_1k_tokens: 0.00125,
        },
        ModelInfo {
            id: "llama-3-70b",
            name: "Llama 3 70B",
            provider: "Meta",
            description: "Open source, powerful reasoning",
            context_window: 8192,
            cost_per_1k_tokens: 0.0009,
        },
    ]
}

pub fn model_by_id(id: &str) -> Option<&'static ModelInfo> {
    model_catalog().iter().find(|m| m.id == id)
}

/// Canned chat reply, interpolated from the selected model and the user's
/// last message.
pub fn chat_reply(model: &ModelInfo, user_input: &str) -> String {
    format!(
        "This is a simulated response from {}. In a production environment, \
         this would be an actual response from the {} API.\n\nYour message \
         was: \"{}\"",
        model.name, model.provider, user_input
    )
}

/// Canned agent reply for the task-execute screen: echoes the request and
/// lists the agent's tool bindings. `processingTime` in the metadata is a
/// random 200-699 ms.
pub fn agent_reply(agent: &Agent, task_id: &str, user_input: &str) -> NewMessage {
    let tool_lines = if agent.tools.is_empty() {
        "- Process your request".to_string()
    } else {
        agent
            .tools
            .iter()
            .map(|t| format!("- Use {}", t.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let content = format!(
        "I understand you want me to {user_input}. As {}, I'll help you with \
         that.\n\nBased on my configuration, I can:\n{tool_lines}\n\nLet me \
         work on this for you...",
        agent.name
    );

    NewMessage {
        task_id: task_id.to_string(),
        agent_id: Some(agent.id.clone()),
        role: MessageRole::Agent,
        content,
        metadata: Some(json!({
            "agentName": agent.name,
            "processingTime": rand::thread_rng().gen_range(200..700),
        })),
    }
}

/// Chat reply after the fixed simulated delay.
pub async fn chat_reply_delayed(model: &ModelInfo, user_input: &str) -> String {
    tokio::time::sleep(RESPONSE_DELAY).await;
    chat_reply(model, user_input)
}

/// Agent reply after the fixed simulated delay.
pub async fn agent_reply_delayed(agent: &Agent, task_id: &str, user_input: &str) -> NewMessage {
    tokio::time::sleep(RESPONSE_DELAY).await;
    agent_reply(agent, task_id, user_input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConsoleStore;

    #[test]
    fn catalog_has_eight_models() {
        assert_eq!(model_catalog().len(), 8);
        assert!(model_by_id("claude-3.5-sonnet").is_some());
        assert!(model_by_id("claude-4").is_none());
    }

    #[test]
    fn catalog_matches_picker_fixture() {
        let ids: Vec<&str> = model_catalog().iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                "gpt-4-turbo",
                "gpt-4",
                "gpt-3.5-turbo",
                "claude-3.5-sonnet",
                "claude-3-opus",
                "claude-3-haiku",
                "gemini-pro",
                "llama-3-70b",
            ]
        );

        let gpt4 = model_by_id("gpt-4").unwrap();
        assert_eq!(gpt4.context_window, 8192);
        assert_eq!(gpt4.cost_per_1k_tokens, 0.06);

        let turbo35 = model_by_id("gpt-3.5-turbo").unwrap();
        assert_eq!(turbo35.context_window, 16_384);
        assert_eq!(turbo35.cost_per_1k_tokens, 0.002);

        let opus = model_by_id("claude-3-opus").unwrap();
        assert_eq!(opus.description, "Most intelligent Claude model");
        assert_eq!(opus.cost_per_1k_tokens, 0.075);
    }

    #[test]
    fn chat_reply_interpolates_model_and_input() {
        let model = model_by_id("gemini-pro").unwrap();
        let reply = chat_reply(model, "summarize this report");

        assert!(reply.contains("simulated response from Gemini Pro"));
        assert!(reply.contains("the Google API"));
        assert!(reply.contains("Your message was: \"summarize this report\""));
    }

    #[test]
    fn agent_reply_lists_bound_tools() {
        let store = ConsoleStore::seeded();
        let agent = store.agent("1").unwrap();
        let msg = agent_reply(&agent, "task1", "handle this ticket");

        assert_eq!(msg.role, MessageRole::Agent);
        assert_eq!(msg.agent_id.as_deref(), Some("1"));
        assert!(msg.content.contains("As Customer Support Pro"));
        assert!(msg.content.contains("- Use web-search"));
        assert!(msg.content.contains("- Use api-call"));

        let meta = msg.metadata.unwrap();
        let processing = meta["processingTime"].as_u64().unwrap();
        assert!((200..700).contains(&processing));
    }

    #[test]
    fn agent_reply_without_tools_falls_back() {
        let store = ConsoleStore::empty();
        let agent = store.create_agent(
            serde_json::from_value(serde_json::json!({
                "name": "Bare Agent",
                "description": "No tools bound",
                "systemPrompt": "You have no tools.",
                "source": "user-created",
            }))
            .unwrap(),
        );
        let msg = agent_reply(&agent, "t", "do a thing");
        assert!(msg.content.contains("- Process your request"));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_reply_waits_fixed_delay() {
        let model = model_by_id("gpt-4").unwrap();
        let started = tokio::time::Instant::now();
        let reply = chat_reply_delayed(model, "hello").await;
        assert!(started.elapsed() >= RESPONSE_DELAY);
        assert!(reply.contains("GPT-4"));
    }
}

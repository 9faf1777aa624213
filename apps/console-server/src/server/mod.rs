// [[AgentOS]]/apps/console-server/src/server/mod.rs
// Purpose: REST router. One route per entity operation from the API table.
// Architecture: API Layer
// Dependencies: Axum, Tower

pub mod handlers;

use crate::store::ConsoleStore;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub fn router(store: Arc<ConsoleStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/agents", get(handlers::list_agents).post(handlers::create_agent))
        .route("/api/agents/from-template", post(handlers::create_agent_from_template))
        .route(
            "/api/agents/:id",
            get(handlers::get_agent)
                .put(handlers::update_agent)
                .delete(handlers::delete_agent),
        )
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/api/tasks/:id",
            get(handlers::get_task).put(handlers::update_task),
        )
        // Same :id name as the sibling route; the router requires matching
        // parameter names on overlapping paths.
        .route("/api/tasks/:id/messages", get(handlers::list_task_messages))
        .route("/api/messages", post(handlers::create_message))
        .route(
            "/api/templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route("/api/templates/:id", get(handlers::get_template))
        .route("/api/statistics", get(handlers::statistics))
        .route("/api/statistics/usage", get(handlers::usage_series))
        .route("/api/statistics/top-agents", get(handlers::top_agents))
        .route(
            "/api/workflows",
            get(handlers::list_workflows).post(handlers::create_workflow),
        )
        .route(
            "/api/workflows/:id",
            get(handlers::get_workflow)
                .put(handlers::update_workflow)
                .delete(handlers::delete_workflow),
        )
        .layer(cors)
        .with_state(store)
}

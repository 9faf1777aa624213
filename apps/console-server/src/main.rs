// [[AgentOS]]/apps/console-server/src/main.rs
// Purpose: Entry point. Seeds the in-memory store and starts the server.
// Architecture: Application Boot
// Dependencies: Axum, Tokio

use std::sync::Arc;

use agentos_console::server;
use agentos_console::store::ConsoleStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agentos_console=debug".parse()?)
                .add_directive("tower_http=trace".parse()?),
        )
        .init();

    tracing::info!("Initializing AgentOS Console...");

    // State lives in this one process and resets to the seed catalog on
    // every restart.
    let store = Arc::new(ConsoleStore::seeded());

    let app = server::router(store);

    let port = std::env::var("CONSOLE_PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("AgentOS Console Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

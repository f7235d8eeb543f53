//! HTTP server entry point.
//!
//! Loads configuration, builds the provider client once, and serves the
//! router on all interfaces (port 5000 unless `PORT` says otherwise).

use std::sync::Arc;

use anyhow::Result;
use parley_llm::OpenAiClient;
use parley_server::config::ServerConfig;
use parley_server::{build_router, ServerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    if let Some(base) = &config.api_base {
        info!("Using completion endpoint at {}", base);
    }

    let provider = OpenAiClient::new(&config.api_key, config.api_base.as_deref());
    let state = Arc::new(ServerState::new(provider));
    let app = build_router(state);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

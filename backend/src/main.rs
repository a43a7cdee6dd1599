use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod rest;
mod speech;

use config::ServerConfig;
use rest::AppState;
use speech::EspeakEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    info!("Using speech engine {:?}", config.speech.program);

    let state = AppState::new(Arc::new(EspeakEngine::new(&config.speech)));
    let app = rest::create_router(state, &config)?;

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("invalid bind_address {:?}", config.bind_address))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

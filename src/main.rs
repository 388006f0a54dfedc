use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use search_gateway::config::GatewayConfig;
use search_gateway::engine::client::ElasticClient;
use search_gateway::ingestion::handlers::handle_create_documents;
use search_gateway::search::handlers::handle_search;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = GatewayConfig::from_env()?;

    // 1. Readiness gate: no traffic is served while the engine is unreachable.
    tracing::info!("Connecting to search engine at {}", config.engine_url);
    let engine = Arc::new(ElasticClient::connect(&config.engine_url).await?);

    // 2. HTTP Router:
    let app = Router::new()
        .route("/documents", post(handle_create_documents::<ElasticClient>))
        .route("/search", get(handle_search::<ElasticClient>))
        .layer(Extension(engine));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

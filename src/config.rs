//! Runtime Configuration
//!
//! Settings come from environment variables with sensible defaults, so the
//! gateway runs unconfigured inside a compose network next to its engine.

use std::net::SocketAddr;

const DEFAULT_ENGINE_URL: &str = "http://elasticsearch:9200";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the search engine (`ELASTICSEARCH_URL`).
    pub engine_url: String,
    /// Address the HTTP server binds to (`BIND_ADDR`).
    pub bind_addr: SocketAddr,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let engine_url = std::env::var("ELASTICSEARCH_URL")
            .unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()?;

        Ok(Self {
            engine_url,
            bind_addr,
        })
    }
}

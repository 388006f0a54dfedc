use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::error::EngineError;
use super::types::RawSearchResponse;
use crate::ingestion::types::Document;

/// Name of the single document index this gateway reads and writes.
pub const INDEX_NAME: &str = "documents";

/// How long to wait between connection attempts at startup.
const RECONNECT_INTERVAL: Duration = Duration::from_secs(3);

/// Default upper bound on any single engine call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The operations both pipelines need from the external search engine.
///
/// The real implementation is [`ElasticClient`]; tests substitute fakes.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Index every document under its `id` in one bulk call.
    async fn bulk_index(&self, documents: &[Document]) -> Result<(), EngineError>;

    /// Execute one query against the document index and return the raw result.
    async fn search(&self, body: Value) -> Result<RawSearchResponse, EngineError>;
}

/// Elasticsearch-backed [`SearchEngine`] over the REST API.
pub struct ElasticClient {
    http: reqwest::Client,
    base_url: String,
}

impl ElasticClient {
    /// Connects to the engine at `base_url`, retrying on a fixed interval until
    /// it responds. The service must not accept requests before this returns.
    pub async fn connect(base_url: &str) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let client = Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        };

        loop {
            match client.ping().await {
                Ok(()) => {
                    tracing::info!("Connected to search engine at {}", client.base_url);
                    return Ok(client);
                }
                Err(err) => {
                    tracing::warn!("Search engine not reachable: {}", err);
                    tracing::info!(
                        "Retrying in {} seconds...",
                        RECONNECT_INTERVAL.as_secs()
                    );
                    tokio::time::sleep(RECONNECT_INTERVAL).await;
                }
            }
        }
    }

    async fn ping(&self) -> Result<(), EngineError> {
        let response = self.http.get(&self.base_url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SearchEngine for ElasticClient {
    async fn bulk_index(&self, documents: &[Document]) -> Result<(), EngineError> {
        let body = bulk_body(documents)?;
        let response = self
            .http
            .post(format!("{}/_bulk", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await?;

        // Failure of the call as a whole fails the batch; per-item results
        // inside a 2xx response are not inspected.
        check_status(response).await?;
        Ok(())
    }

    async fn search(&self, body: Value) -> Result<RawSearchResponse, EngineError> {
        let response = self
            .http
            .post(format!("{}/{}/_search", self.base_url, INDEX_NAME))
            .json(&body)
            .send()
            .await?;

        let response = check_status(response).await?;
        let text = response.text().await?;
        let raw = serde_json::from_str(&text)?;
        Ok(raw)
    }
}

/// Builds the NDJSON `_bulk` body: one action line plus one source line per
/// document, with the trailing newline the protocol requires.
pub(crate) fn bulk_body(documents: &[Document]) -> Result<String, serde_json::Error> {
    let mut body = String::new();
    for doc in documents {
        let action = serde_json::json!({
            "index": { "_index": INDEX_NAME, "_id": doc.id }
        });
        body.push_str(&action.to_string());
        body.push('\n');
        body.push_str(&serde_json::to_string(doc)?);
        body.push('\n');
    }
    Ok(body)
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, EngineError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(EngineError::Rejected { status, body })
}

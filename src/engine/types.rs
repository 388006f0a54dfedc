//! Engine Wire Types
//!
//! Raw shapes returned by the engine's `_search` endpoint. Only the fields the
//! query pipeline consumes are modeled; hit payloads stay as untyped JSON until
//! the pipeline projects them into the response contract.

use serde::Deserialize;
use serde_json::Value;

/// Top-level `_search` response: processing time plus the hit collection.
#[derive(Debug, Deserialize)]
pub struct RawSearchResponse {
    pub took: u64,
    pub hits: RawHits,
}

/// The hit collection with the engine-reported total.
#[derive(Debug, Deserialize)]
pub struct RawHits {
    /// A bare number on older engines, `{"value": n, "relation": ...}` on newer ones.
    pub total: Value,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// A single matched document; `_source` is the stored payload as-is.
#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_source")]
    pub source: Value,
}

impl RawHits {
    /// The total hit count as an opaque string, tolerating both total shapes.
    pub fn total_count(&self) -> String {
        let count = match &self.total {
            Value::Object(obj) => obj.get("value").and_then(Value::as_u64),
            other => other.as_u64(),
        };
        count.unwrap_or(0).to_string()
    }
}

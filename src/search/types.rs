use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query-string parameters for `GET /search`.
///
/// `skip` and `take` stay textual here so a non-numeric value falls through to
/// the pipeline's defaulting instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub skip: Option<String>,
    pub take: Option<String>,
}

/// Outbound projection of a stored document. Deliberately omits `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentView {
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

/// The response contract for a successful search.
///
/// `time` and `hits` are opaque strings copied from the engine report; the
/// documents keep the engine's relevance order.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub time: String,
    pub hits: String,
    pub documents: Vec<DocumentView>,
}

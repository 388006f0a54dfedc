//! Ingestion Data Types
//!
//! Defines the canonical stored document and the transient submission shape
//! clients send to the ingestion endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The canonical document as stored in the search index.
///
/// `id` is system-generated and immutable once assigned; clients never supply
/// it. `created_at` is stamped once, in UTC, at ingestion time. After a
/// successful bulk write the engine owns the document; the pipeline keeps no
/// long-lived reference to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

/// One inbound document submission. The only fields a client may supply;
/// both must be present, though either may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSubmission {
    pub title: String,
    pub content: String,
}

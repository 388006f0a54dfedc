use chrono::Utc;
use uuid::Uuid;

use super::types::{Document, DocumentSubmission};
use crate::engine::client::SearchEngine;
use crate::engine::error::EngineError;

/// Turns submissions into canonical documents: fresh unique id, UTC timestamp,
/// input order preserved. Documents within one batch may share an instant.
pub fn stage(submissions: Vec<DocumentSubmission>) -> Vec<Document> {
    submissions
        .into_iter()
        .map(|submission| Document {
            id: Uuid::new_v4().to_string(),
            title: submission.title,
            created_at: Utc::now(),
            content: submission.content,
        })
        .collect()
}

/// Stages a batch of submissions and commits it with exactly one bulk write.
///
/// An empty batch is a no-op success: no identifiers are generated and the
/// engine is never called. Any engine failure fails the whole batch; no
/// per-document results are inspected and no retry is attempted.
pub async fn ingest<E: SearchEngine>(
    engine: &E,
    submissions: Vec<DocumentSubmission>,
) -> Result<Vec<Document>, EngineError> {
    if submissions.is_empty() {
        return Ok(Vec::new());
    }

    let documents = stage(submissions);
    engine.bulk_index(&documents).await?;
    Ok(documents)
}

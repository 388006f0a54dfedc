use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::StatusCode;
use std::sync::Arc;

use super::pipeline::ingest;
use super::types::DocumentSubmission;
use crate::engine::client::SearchEngine;
use crate::response::{error_response, ApiError};

/// `POST /documents` — bulk document ingestion.
///
/// The body must be a JSON array of `{title, content}` objects. A body that
/// fails to parse is rejected before any identifier is generated or engine
/// call is made; an engine failure fails the whole batch.
pub async fn handle_create_documents<E>(
    Extension(engine): Extension<Arc<E>>,
    body: Bytes,
) -> Result<StatusCode, ApiError>
where
    E: SearchEngine + 'static,
{
    let submissions: Vec<DocumentSubmission> = match serde_json::from_slice(&body) {
        Ok(submissions) => submissions,
        Err(err) => {
            tracing::warn!("Rejected malformed ingestion body: {}", err);
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Malformed request body",
            ));
        }
    };

    match ingest(engine.as_ref(), submissions).await {
        Ok(documents) => {
            tracing::info!("Indexed {} documents", documents.len());
            Ok(StatusCode::OK)
        }
        Err(err) => {
            tracing::error!("Bulk write failed: {}", err);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create documents",
            ))
        }
    }
}

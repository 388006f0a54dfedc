use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use super::query::{effective_pagination, run_search};
use super::types::{SearchParams, SearchResponse};
use crate::engine::client::SearchEngine;
use crate::response::{error_response, ApiError};

/// `GET /search?query=&skip=&take=` — fuzzy multi-field search.
///
/// An absent or empty query is rejected without touching the engine. Invalid
/// pagination values fall back to their defaults rather than failing the
/// request.
pub async fn handle_search<E>(
    Extension(engine): Extension<Arc<E>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError>
where
    E: SearchEngine + 'static,
{
    let query = match params.query.as_deref() {
        Some(query) if !query.is_empty() => query,
        _ => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Query not specified",
            ))
        }
    };

    let (skip, take) = effective_pagination(params.skip.as_deref(), params.take.as_deref());

    match run_search(engine.as_ref(), query, skip, take).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            tracing::error!("Search query failed: {}", err);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
            ))
        }
    }
}

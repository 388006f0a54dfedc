use serde_json::{json, Value};

use super::types::{DocumentView, SearchResponse};
use crate::engine::client::SearchEngine;
use crate::engine::error::EngineError;
use crate::engine::types::RawHit;

/// Fields every query matches against.
pub const SEARCH_FIELDS: [&str; 2] = ["title", "content"];

/// Maximum edit distance tolerated per matched term. Fixed policy, not
/// client-configurable.
pub const FUZZINESS: &str = "2";

/// Minimum number of query clauses that must match. Fixed policy, not
/// client-configurable.
pub const MINIMUM_SHOULD_MATCH: &str = "2";

pub const DEFAULT_SKIP: usize = 0;
pub const DEFAULT_TAKE: usize = 10;

/// Resolves the effective pagination window. A value that is absent or fails
/// to parse falls back to the default; a parsed value is used as-is.
pub fn effective_pagination(skip: Option<&str>, take: Option<&str>) -> (usize, usize) {
    let skip = skip.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SKIP);
    let take = take.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_TAKE);
    (skip, take)
}

/// Builds the engine query body: a fuzzy `multi_match` over both document
/// fields with the fixed match policy, paginated by offset and limit. No
/// secondary sort is applied; ordering is the engine's relevance ranking.
pub fn build_search_body(query: &str, skip: usize, take: usize) -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": query,
                "fields": SEARCH_FIELDS,
                "fuzziness": FUZZINESS,
                "minimum_should_match": MINIMUM_SHOULD_MATCH,
            }
        },
        "from": skip,
        "size": take,
    })
}

/// Projects raw hits into document views, preserving order. A hit whose
/// payload does not decode is dropped; one bad document never fails the
/// request.
pub fn project_hits(hits: Vec<RawHit>) -> Vec<DocumentView> {
    hits.into_iter()
        .filter_map(|hit| match serde_json::from_value(hit.source) {
            Ok(view) => Some(view),
            Err(err) => {
                tracing::debug!("Dropping unmappable hit: {}", err);
                None
            }
        })
        .collect()
}

/// Executes one engine query and maps the raw result into the response
/// contract. No retry on failure; retry is the caller's responsibility.
pub async fn run_search<E: SearchEngine>(
    engine: &E,
    query: &str,
    skip: usize,
    take: usize,
) -> Result<SearchResponse, EngineError> {
    let raw = engine.search(build_search_body(query, skip, take)).await?;

    let time = raw.took.to_string();
    let hits = raw.hits.total_count();
    let documents = project_hits(raw.hits.hits);

    Ok(SearchResponse {
        time,
        hits,
        documents,
    })
}

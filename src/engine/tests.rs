//! Engine Module Tests
//!
//! Validates the wire-level building blocks of the search engine client.
//!
//! ## Test Scopes
//! - **Bulk body**: Ensures the NDJSON `_bulk` payload pairs every document
//!   with its action line and carries the required trailing newline.
//! - **Response decoding**: Verifies raw `_search` responses decode across
//!   engine versions (numeric and object total shapes).

#[cfg(test)]
mod tests {
    use crate::engine::client::{bulk_body, INDEX_NAME};
    use crate::engine::types::RawSearchResponse;
    use crate::ingestion::types::Document;
    use chrono::{TimeZone, Utc};

    fn sample_document(id: &str, title: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            content: "some content".to_string(),
        }
    }

    // ============================================================
    // BULK BODY TESTS
    // ============================================================

    #[test]
    fn test_bulk_body_pairs_action_and_source_lines() {
        let docs = vec![sample_document("a1", "first"), sample_document("b2", "second")];

        let body = bulk_body(&docs).unwrap();
        let lines: Vec<&str> = body.lines().collect();

        // Two documents -> two action lines + two source lines
        assert_eq!(lines.len(), 4);

        let action: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(action["index"]["_index"], INDEX_NAME);
        assert_eq!(action["index"]["_id"], "a1");

        let source: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(source["title"], "first");
        assert_eq!(source["content"], "some content");

        let second_action: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(second_action["index"]["_id"], "b2");
    }

    #[test]
    fn test_bulk_body_ends_with_newline() {
        let docs = vec![sample_document("a1", "first")];
        let body = bulk_body(&docs).unwrap();

        // The bulk protocol requires a trailing newline after the last line
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn test_bulk_body_empty_batch_is_empty() {
        let body = bulk_body(&[]).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_bulk_body_source_carries_timestamp() {
        let docs = vec![sample_document("a1", "first")];
        let body = bulk_body(&docs).unwrap();

        let source: serde_json::Value =
            serde_json::from_str(body.lines().nth(1).unwrap()).unwrap();
        assert_eq!(source["created_at"], "2024-05-01T12:00:00Z");
    }

    // ============================================================
    // RESPONSE DECODING TESTS
    // ============================================================

    #[test]
    fn test_decode_response_with_object_total() {
        let raw: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "took": 12,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_source": { "title": "a" } },
                    { "_source": { "title": "b" } }
                ]
            }
        }))
        .unwrap();

        assert_eq!(raw.took, 12);
        assert_eq!(raw.hits.total_count(), "2");
        assert_eq!(raw.hits.hits.len(), 2);
    }

    #[test]
    fn test_decode_response_with_numeric_total() {
        let raw: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "took": 3,
            "hits": {
                "total": 7,
                "hits": []
            }
        }))
        .unwrap();

        assert_eq!(raw.hits.total_count(), "7");
        assert!(raw.hits.hits.is_empty());
    }

    #[test]
    fn test_decode_response_missing_hits_array_defaults_empty() {
        let raw: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "took": 1,
            "hits": { "total": 0 }
        }))
        .unwrap();

        assert!(raw.hits.hits.is_empty());
    }

    #[test]
    fn test_total_count_unrecognized_shape_is_zero() {
        let raw: RawSearchResponse = serde_json::from_value(serde_json::json!({
            "took": 1,
            "hits": { "total": "weird", "hits": [] }
        }))
        .unwrap();

        assert_eq!(raw.hits.total_count(), "0");
    }
}

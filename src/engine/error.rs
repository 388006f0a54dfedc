//! Engine Boundary Errors
//!
//! Every failure crossing the search engine boundary is classified here, so the
//! HTTP handlers can map it to a server-error response without inspecting the
//! underlying cause.

use thiserror::Error;

/// Errors produced by calls to the external search engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request never completed (connection refused, timeout, aborted).
    #[error("transport failure talking to search engine: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine answered with a non-success status.
    #[error("search engine rejected the request ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The engine's response (or an outbound document) could not be (de)serialized.
    #[error("failed to decode search engine payload: {0}")]
    Decode(#[from] serde_json::Error),
}

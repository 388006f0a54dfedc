//! Shared HTTP Response Helpers
//!
//! The gateway reports every failure as a small JSON object with a single
//! `error` field; both pipelines' handlers build their responses through these
//! helpers to keep the contract uniform.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// The error body every failed request carries.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status-plus-body pair handlers return on failure.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

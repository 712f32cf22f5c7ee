//! Response bodies for the chat API.
//!
//! Success and fallback replies share one shape; payload errors use another
//! so callers can tell them apart.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to clients on any inbound-payload failure.
pub const GENERIC_ERROR: &str = "Failed to process request";
pub const TOO_LARGE_ERROR: &str = "Request body too large";
pub const TIMEOUT_ERROR: &str = "Request timed out";

/// `{ "message": ... }`, status 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// `{ "error": ... }`, status 500 (413/408 for size and deadline failures).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be parsed into a chat request.
    #[error("invalid chat payload: {0}")]
    InvalidPayload(String),

    /// The body exceeded `security.max_body_size`.
    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// The request did not finish within `listener.request_timeout_secs`.
    #[error("request exceeded {0} seconds")]
    Timeout(u64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidPayload(_) => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR),
            ApiError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE_ERROR),
            ApiError::Timeout(_) => (StatusCode::REQUEST_TIMEOUT, TIMEOUT_ERROR),
        };
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

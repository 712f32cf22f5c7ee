//! Request deadline enforcement.
//!
//! Bounds the whole inbound request (body upload included). On expiry the
//! handler future is dropped and the client gets `408 { error }`, keeping
//! every response in the `{ message }` / `{ error }` shape.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::http::response::ApiError;

pub async fn enforce_deadline(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request_id(request.headers());

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(
                request_id = %request_id,
                limit_secs = limit.as_secs(),
                "Request deadline exceeded"
            );
            ApiError::Timeout(limit.as_secs()).into_response()
        }
    }
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, deadline, body limit)
//! - Decode inbound payloads (any content type) and hand them to the orchestrator
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::chat::{ChatOrchestrator, ChatRequest};
use crate::config::AdvisorConfig;
use crate::http::middleware::enforce_deadline;
use crate::http::request::{request_id, UuidRequestId};
use crate::http::response::{ApiError, ChatResponse};
use crate::observability::metrics;
use crate::upstream::UpstreamError;

/// Route serving the chat API, as called by the dashboard client.
pub const CHAT_PATH: &str = "/api/openclaw";
/// Alias of `CHAT_PATH`.
pub const CHAT_ALIAS_PATH: &str = "/api/chat";
pub const HEALTH_PATH: &str = "/health";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ChatOrchestrator>,
    pub max_body_size: usize,
}

/// HTTP server for the advisor proxy.
pub struct HttpServer {
    router: Router,
    config: AdvisorConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AdvisorConfig) -> Result<Self, UpstreamError> {
        let orchestrator = Arc::new(ChatOrchestrator::new(config.gateway.clone())?);
        let state = AppState {
            orchestrator,
            max_body_size: config.security.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AdvisorConfig, state: AppState) -> Router {
        let deadline = Duration::from_secs(config.listener.request_timeout_secs);

        Router::new()
            .route(CHAT_PATH, post(chat_handler))
            .route(CHAT_ALIAS_PATH, post(chat_handler))
            .route(HEALTH_PATH, get(health_handler))
            .with_state(state)
            // applies to the Bytes extractor with or without Content-Length
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(middleware::from_fn_with_state(deadline, enforce_deadline))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            gateway = %self.config.gateway.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let request = decode_payload(body, state.max_body_size).map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Rejected chat payload");
        metrics::record_chat_request("error", start);
        e
    })?;

    tracing::debug!(
        request_id = %request_id,
        messages = request.messages.len(),
        has_context = request.context.is_some(),
        "Chat request"
    );

    let reply = state.orchestrator.respond(&request, &request_id).await;
    metrics::record_chat_request(reply.source.as_str(), start);

    Ok(Json(ChatResponse {
        message: reply.message,
    }))
}

/// Decode the raw body as a chat request, whatever its content type.
fn decode_payload(
    body: Result<Bytes, BytesRejection>,
    max_body_size: usize,
) -> Result<ChatRequest, ApiError> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(max_body_size)
        } else {
            ApiError::InvalidPayload(rejection.body_text())
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

#[derive(Serialize)]
struct SystemStatus {
    version: &'static str,
    status: &'static str,
}

async fn health_handler() -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn server_with(mut config: AdvisorConfig) -> HttpServer {
        // nothing listens here; chat calls would fall back
        config.gateway.url = "http://127.0.0.1:9".into();
        config.gateway.timeout_secs = 2;
        HttpServer::new(config).unwrap()
    }

    fn server() -> HttpServer {
        server_with(AdvisorConfig::default())
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = server()
            .router()
            .oneshot(Request::get(HEALTH_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "operational");
    }

    #[tokio::test]
    async fn test_malformed_body_is_error_shape() {
        let response = server()
            .router()
            .oneshot(
                Request::post(CHAT_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Failed to process request"}));
    }

    #[tokio::test]
    async fn test_oversized_body_without_length_is_413() {
        let mut config = AdvisorConfig::default();
        config.security.max_body_size = 64;
        let body = format!(
            r#"{{"messages":[{{"role":"user","content":"{}"}}]}}"#,
            "x".repeat(200)
        );

        // no Content-Length header, as with a chunked upload
        let response = server_with(config)
            .router()
            .oneshot(Request::post(CHAT_PATH).body(Body::from(body)).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "Request body too large"})
        );
    }

    #[tokio::test]
    async fn test_alias_route_served() {
        let response = server()
            .router()
            .oneshot(
                Request::post(CHAT_ALIAS_PATH)
                    .body(Body::from("[]"))
                    .unwrap(),
            )
            .await
            .unwrap();

        // reaches the chat handler: a JSON array is the wrong shape
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json_body(response).await.get("error").is_some());
    }

    #[test]
    fn test_decode_payload() {
        let body = Ok(Bytes::from_static(br#"{"messages":[{"role":"user","content":"hi"}]}"#));
        let request = decode_payload(body, 1024).unwrap();
        assert_eq!(request.last_user_message(), "hi");

        let bad = decode_payload(Ok(Bytes::from_static(b"nope")), 1024);
        assert!(matches!(bad, Err(ApiError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn test_client_request_id_is_echoed() {
        let response = server()
            .router()
            .oneshot(
                Request::get(HEALTH_PATH)
                    .header("x-request-id", "caller-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "caller-42");
    }
}

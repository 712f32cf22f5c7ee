//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use advisor_proxy::{AdvisorConfig, HttpServer, Shutdown};
use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

/// One request as seen by the mock gateway.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Captured {
    pub body: Value,
    pub authorization: Option<String>,
    pub request_id: Option<String>,
}

pub struct MockGateway {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

#[allow(dead_code)]
impl MockGateway {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

/// Start a programmable gateway on an ephemeral port.
///
/// `f` decides the status and raw body of every completion response.
pub async fn start_mock_gateway<F, Fut>(f: F) -> MockGateway
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));

    let sink = captured.clone();
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, body: String| {
            let f = f.clone();
            let sink = sink.clone();
            async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                sink.lock().unwrap().push(Captured {
                    body: serde_json::from_str(&body).unwrap_or(Value::Null),
                    authorization: header("authorization"),
                    request_id: header("x-request-id"),
                });

                let (status, body) = f().await;
                (StatusCode::from_u16(status).unwrap(), body)
            }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockGateway { addr, captured }
}

/// A gateway that always answers 200 with the given assistant text.
#[allow(dead_code)]
pub async fn start_replying_gateway(text: &'static str) -> MockGateway {
    start_mock_gateway(move || async move {
        let envelope = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": text } }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 5 }
        });
        (200, envelope.to_string())
    })
    .await
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Boot the service on an ephemeral port pointed at `gateway_url`.
pub async fn start_service(mut config: AdvisorConfig, gateway_url: String) -> (String, Shutdown) {
    config.gateway.url = gateway_url;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}/api/openclaw", addr), shutdown)
}

//! OpenAI-compatible gateway client.
//!
//! # Responsibilities
//! - Build the chat-completion payload from the system prompt and history
//! - Issue exactly one POST per call, bounded by the configured deadline
//! - Map transport/status/body problems to `UpstreamError`
//! - Extract reply text from the success envelope

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::types::ChatMessage;
use crate::config::GatewayConfig;
use crate::upstream::error::UpstreamError;

/// Path appended to the configured gateway base URL.
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A `{role, content}` pair in the outbound payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

/// Outbound chat-completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// System message first, then the history mapped to `{role, content}`.
    pub fn new(config: &GatewayConfig, system_prompt: String, history: &[ChatMessage]) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(CompletionMessage {
            role: "system".to_string(),
            content: system_prompt,
        });
        messages.extend(history.iter().map(|m| CompletionMessage {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        }));

        Self {
            model: config.model.clone(),
            messages,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u64>,
    completion_tokens: Option<u64>,
}

/// Pull the reply text out of a success envelope.
///
/// Falls back to the whole envelope as compact JSON when
/// `choices[0].message.content` is missing, not a string, or empty.
pub fn extract_reply(envelope: &Value) -> String {
    envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| envelope.to_string())
}

/// HTTP client bound to one gateway endpoint.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
    timeout: Duration,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.url.trim_end_matches('/'), COMPLETIONS_PATH),
            token: config.bearer_token().map(str::to_string),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Full URL the client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one completion request and return the reply text.
    ///
    /// The deadline covers connect, send and body read. On expiry the request
    /// future is dropped here, closing the connection before the caller
    /// continues.
    pub async fn complete(
        &self,
        payload: &CompletionRequest,
        request_id: &str,
    ) -> Result<String, UpstreamError> {
        let timeout_secs = self.timeout.as_secs();

        let mut req = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header("x-request-id", request_id)
            .json(payload);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, timeout_secs))?;
        let envelope: Value =
            serde_json::from_slice(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        if let Some(usage) = envelope
            .get("usage")
            .and_then(|u| serde_json::from_value::<Usage>(u.clone()).ok())
        {
            tracing::debug!(
                request_id = %request_id,
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                "Gateway usage"
            );
        }

        Ok(extract_reply(&envelope))
    }
}

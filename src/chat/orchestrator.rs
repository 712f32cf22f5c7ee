//! Chat request orchestration.
//!
//! One inbound request produces at most one gateway call. Any gateway failure
//! is answered locally from `fallback`, so callers always get a reply string.

use std::time::Instant;

use crate::chat::fallback::fallback_reply;
use crate::chat::prompt::build_system_prompt;
use crate::chat::types::ChatRequest;
use crate::config::GatewayConfig;
use crate::observability::metrics;
use crate::upstream::{CompletionRequest, GatewayClient, UpstreamError};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Upstream,
    Fallback,
}

impl ReplySource {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplySource::Upstream => "upstream",
            ReplySource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub message: String,
    pub source: ReplySource,
}

/// Proxies conversations to the gateway and synthesizes replies on failure.
#[derive(Clone)]
pub struct ChatOrchestrator {
    client: GatewayClient,
    config: GatewayConfig,
}

impl ChatOrchestrator {
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let client = GatewayClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Produce a reply for `request`. Never fails.
    pub async fn respond(&self, request: &ChatRequest, request_id: &str) -> Reply {
        let system_prompt = build_system_prompt(request.context.as_ref());
        let payload = CompletionRequest::new(&self.config, system_prompt, &request.messages);

        let start = Instant::now();
        let result = self.client.complete(&payload, request_id).await;
        metrics::record_gateway_call(&result, start);

        match result {
            Ok(message) => {
                tracing::debug!(request_id = %request_id, chars = message.len(), "Gateway replied");
                Reply {
                    message,
                    source: ReplySource::Upstream,
                }
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    kind = e.kind(),
                    error = %e,
                    "Gateway call failed, returning fallback"
                );
                Reply {
                    message: fallback_reply(request.last_user_message(), request.context.as_ref()),
                    source: ReplySource::Fallback,
                }
            }
        }
    }
}

//! Gateway failure classification.

use thiserror::Error;

/// Why a gateway call did not produce a reply.
///
/// Every variant is recovered by the orchestrator; the kind only feeds logs
/// and metrics.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request deadline elapsed.
    #[error("gateway timed out after {0} seconds")]
    Timeout(u64),

    /// Connection refused, DNS failure, reset, etc.
    #[error("gateway unreachable: {0}")]
    Network(String),

    /// The gateway answered with a non-success status.
    #[error("gateway returned {0}")]
    Status(u16),

    /// A success status whose body is not JSON.
    #[error("malformed gateway response: {0}")]
    Malformed(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl UpstreamError {
    /// Classify a transport error raised while sending or reading the body.
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(timeout_secs)
        } else if err.is_decode() {
            UpstreamError::Malformed(err.to_string())
        } else {
            UpstreamError::Network(err.to_string())
        }
    }

    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Network(_) => "network",
            UpstreamError::Status(_) => "status",
            UpstreamError::Malformed(_) => "malformed",
            UpstreamError::Client(_) => "client",
        }
    }
}

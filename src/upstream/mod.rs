//! Upstream gateway subsystem.
//!
//! # Data Flow
//! ```text
//! CompletionRequest (system prompt + history)
//!     → client.rs (single POST, deadline attached to the request)
//!     → status check, JSON decode
//!     → reply text, or error.rs (classified failure)
//! ```

pub mod client;
pub mod error;

pub use client::{CompletionRequest, GatewayClient};
pub use error::UpstreamError;

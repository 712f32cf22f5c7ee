//! Chat orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! ChatRequest { messages, context? }
//!     → prompt.rs (system prompt + optional context block)
//!     → orchestrator.rs (one gateway call via upstream::GatewayClient)
//!         ├─ success → reply text from envelope
//!         └─ any failure → fallback.rs (keyword rules over last user message)
//!     → Reply { message }
//! ```
//!
//! # Design Decisions
//! - No state is shared between requests
//! - Fallback output is a pure function of (last user message, context)

pub mod fallback;
pub mod format;
pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use orchestrator::{ChatOrchestrator, Reply, ReplySource};
pub use types::{ChatMessage, ChatRequest, Role, WalletContext};

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, body limit)
//!     → middleware.rs (request deadline)
//!     → request.rs (request ID assigned/propagated)
//!     → chat handler (payload parse → chat::ChatOrchestrator)
//!     → response.rs ({ message } or { error })
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{ApiError, ChatResponse, ErrorResponse};
pub use server::HttpServer;

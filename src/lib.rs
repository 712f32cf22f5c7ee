//! Wallet-aware chat proxy for an AI advisor gateway.

pub mod chat;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::AdvisorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! Advisor proxy (v1)
//!
//! Serves the dashboard's chat API and forwards conversations to an
//! OpenAI-compatible AI gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌───────────────────────────────────────────────┐
//!                         │                 ADVISOR PROXY                 │
//!                         │                                               │
//!   POST /api/openclaw    │  ┌─────────┐    ┌──────────────┐              │
//!   ──────────────────────┼─▶│  http   │───▶│     chat     │              │
//!                         │  │ server  │    │ orchestrator │              │
//!                         │  └─────────┘    └──────┬───────┘              │
//!                         │                        │                      │
//!                         │              ┌─────────┴─────────┐            │
//!                         │              ▼                   ▼            │
//!                         │       ┌────────────┐      ┌────────────┐      │
//!   { message }           │       │  upstream  │      │  fallback  │      │
//!   ◀─────────────────────┼───────│   client   │─────▶│   rules    │      │     AI
//!                         │       └─────┬──────┘ fail └────────────┘      │   Gateway
//!                         │             └─────────────────────────────────┼──▶
//!                         │                                               │
//!                         │  config · observability · lifecycle           │
//!                         └───────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use advisor_proxy::config::load_config;
use advisor_proxy::observability::{logging, metrics};
use advisor_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "advisor-proxy")]
#[command(about = "Chat API proxy for the portfolio advisor gateway", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "ADVISOR_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("advisor-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        gateway_url = %config.gateway.url,
        gateway_timeout_secs = config.gateway.timeout_secs,
        auth = config.gateway.bearer_token().is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

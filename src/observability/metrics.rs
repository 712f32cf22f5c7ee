//! Metrics collection and exposition.
//!
//! # Metrics
//! - `advisor_chat_requests_total` (counter): inbound chat requests by outcome
//! - `advisor_chat_request_duration_seconds` (histogram): end-to-end latency by outcome
//! - `advisor_gateway_failures_total` (counter): failed gateway calls by kind
//! - `advisor_gateway_duration_seconds` (histogram): gateway call latency
//!
//! Outcomes are `upstream`, `fallback` and `error`. Without an installed
//! recorder all updates are no-ops.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::upstream::UpstreamError;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished inbound chat request.
pub fn record_chat_request(outcome: &'static str, start: Instant) {
    ::metrics::counter!("advisor_chat_requests_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("advisor_chat_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one gateway call.
pub fn record_gateway_call(result: &Result<String, UpstreamError>, start: Instant) {
    ::metrics::histogram!("advisor_gateway_duration_seconds").record(start.elapsed().as_secs_f64());
    if let Err(e) = result {
        ::metrics::counter!("advisor_gateway_failures_total", "kind" => e.kind()).increment(1);
    }
}

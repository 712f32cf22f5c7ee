//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and cross-field
//! constraints. Every problem is reported, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AdvisorConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("gateway.url: {0}")]
    InvalidGatewayUrl(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("listener.request_timeout_secs ({server}) must exceed gateway.timeout_secs ({gateway})")]
    ServerTimeoutTooShort { server: u64, gateway: u64 },

    #[error("gateway.temperature must be within [0, 2], got {0}")]
    TemperatureOutOfRange(f32),

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),

    #[error("observability.log_format: unknown format '{0}'")]
    UnknownLogFormat(String),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &AdvisorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::Zero("listener.request_timeout_secs"));
    }

    let gateway = &config.gateway;
    match url::Url::parse(&gateway.url) {
        Ok(u) if u.scheme() == "http" || u.scheme() == "https" => {}
        Ok(u) => errors.push(ValidationError::InvalidGatewayUrl(format!(
            "unsupported scheme '{}'",
            u.scheme()
        ))),
        Err(e) => errors.push(ValidationError::InvalidGatewayUrl(e.to_string())),
    }
    if gateway.timeout_secs == 0 {
        errors.push(ValidationError::Zero("gateway.timeout_secs"));
    }
    if config.listener.request_timeout_secs <= gateway.timeout_secs {
        errors.push(ValidationError::ServerTimeoutTooShort {
            server: config.listener.request_timeout_secs,
            gateway: gateway.timeout_secs,
        });
    }
    if gateway.max_tokens == 0 {
        errors.push(ValidationError::Zero("gateway.max_tokens"));
    }
    if !(0.0..=2.0).contains(&gateway.temperature) {
        errors.push(ValidationError::TemperatureOutOfRange(gateway.temperature));
    }

    let obs = &config.observability;
    if !LOG_LEVELS.contains(&obs.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(obs.log_level.clone()));
    }
    if !LOG_FORMATS.contains(&obs.log_format.as_str()) {
        errors.push(ValidationError::UnknownLogFormat(obs.log_format.clone()));
    }
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: obs.metrics_address.clone(),
        });
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

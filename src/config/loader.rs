//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AdvisorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Environment variables that override file settings.
pub const ENV_GATEWAY_URL: &str = "GATEWAY_URL";
pub const ENV_GATEWAY_TOKEN: &str = "GATEWAY_TOKEN";
pub const ENV_BIND_ADDRESS: &str = "ADVISOR_BIND_ADDRESS";

/// Parse a TOML document into a config without validating it.
pub fn parse_config(content: &str) -> Result<AdvisorConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration: file (if any), then environment overrides, then validation.
pub fn load_config(path: Option<&Path>) -> Result<AdvisorConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AdvisorConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment-style overrides from `lookup`.
pub fn apply_overrides<F>(config: &mut AdvisorConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_GATEWAY_URL).filter(|v| !v.is_empty()) {
        config.gateway.url = url;
    }
    if let Some(token) = lookup(ENV_GATEWAY_TOKEN) {
        config.gateway.token = Some(token);
    }
    if let Some(addr) = lookup(ENV_BIND_ADDRESS).filter(|v| !v.is_empty()) {
        config.listener.bind_address = addr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_document() {
        let config = parse_config(
            r#"
            [gateway]
            url = "http://10.0.0.5:18789"
            timeout_secs = 10

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway.url, "http://10.0.0.5:18789");
        assert_eq!(config.gateway.timeout_secs, 10);
        assert_eq!(config.gateway.max_tokens, 1024);
        assert_eq!(config.observability.log_format, "json");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[gateway\nurl = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_GATEWAY_URL, "https://gw.example.com"),
            (ENV_GATEWAY_TOKEN, "tok"),
        ]
        .into_iter()
        .collect();

        let mut config = AdvisorConfig::default();
        apply_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.gateway.url, "https://gw.example.com");
        assert_eq!(config.gateway.bearer_token(), Some("tok"));
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::Zero("gateway.max_tokens"),
            ValidationError::UnknownLogFormat("xml".into()),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: gateway.max_tokens must be greater than zero, \
             observability.log_format: unknown format 'xml'"
        );
    }
}

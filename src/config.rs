// src/config.rs
use std::time::Duration;

use crate::errors::{PortalError, Result};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;
pub const DEFAULT_PORT: u16 = 8080;

/// Where the classification backend lives and how long one comparison call
/// may take before the request is aborted.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub api_base: String,
    pub timeout: Duration,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables:
    /// `API_URL`, `API_TIMEOUT` (milliseconds), `PORT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, but the variable source is injectable so tests
    /// never touch the process environment.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = get("API_URL").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_ms = match get("API_TIMEOUT") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                PortalError::Config(format!("API_TIMEOUT must be milliseconds, got '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                PortalError::Config(format!("PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            backend: BackendConfig {
                api_base,
                timeout: Duration::from_millis(timeout_ms),
            },
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.backend.api_base, DEFAULT_API_BASE);
        assert_eq!(config.backend.timeout, Duration::from_millis(120_000));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "API_URL" => Some("http://10.0.0.7:9000/api".to_string()),
            "API_TIMEOUT" => Some("2500".to_string()),
            "PORT" => Some("3000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.backend.api_base, "http://10.0.0.7:9000/api");
        assert_eq!(config.backend.timeout, Duration::from_millis(2500));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn garbage_timeout_is_a_config_error() {
        let err = AppConfig::from_lookup(|key| match key {
            "API_TIMEOUT" => Some("two minutes".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(err, PortalError::Config(_)));
        assert!(err.to_string().contains("API_TIMEOUT"));
    }

    #[test]
    fn garbage_port_is_a_config_error() {
        let err = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("-1".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(err, PortalError::Config(_)));
    }
}

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOST is not a valid IP address: {0}")]
    InvalidHost(String),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("API_BASE_PATH must start with '/': {0}")]
    InvalidBasePath(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Empty means the routes are mounted at the root.
    pub base_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_path: String::new(),
        }
    }
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("API_BASE_PATH").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        base_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match host {
            Some(h) => h.parse().map_err(|_| ConfigError::InvalidHost(h))?,
            None => defaults.host,
        };
        let port = match port {
            Some(p) => p.parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => defaults.port,
        };
        let base_path = match base_path {
            Some(b) => normalize_base_path(b)?,
            None => defaults.base_path,
        };

        Ok(Self { host, port, base_path })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn normalize_base_path(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(raw));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(None, None, None).expect("Failed to build config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(
            Some("0.0.0.0".to_string()),
            Some("8080".to_string()),
            Some("/api/v1/".to_string()),
        )
        .expect("Failed to build config");
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.base_path, "/api/v1");
    }

    #[test]
    fn test_root_base_path_is_empty() {
        let config = AppConfig::from_vars(None, None, Some("/".to_string())).expect("Failed to build config");
        assert_eq!(config.base_path, "");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            AppConfig::from_vars(Some("localhost:1".to_string()), None, None),
            Err(ConfigError::InvalidHost("localhost:1".to_string()))
        );
        assert_eq!(
            AppConfig::from_vars(None, Some("70000".to_string()), None),
            Err(ConfigError::InvalidPort("70000".to_string()))
        );
        assert_eq!(
            AppConfig::from_vars(None, None, Some("api".to_string())),
            Err(ConfigError::InvalidBasePath("api".to_string()))
        );
    }
}

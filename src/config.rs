use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid HOST: {0}")]
    InvalidHost(String),
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
    #[error("Invalid CORS_ORIGIN: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// `None` allows any origin, without credentials.
    pub cors_origin: Option<HeaderValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            cors_origin: None,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `CORS_ORIGIN` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(origin) = lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty()) {
            let origin = origin.trim();
            config.cors_origin = Some(
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))?,
            );
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_localhost_3000() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().unwrap());
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn reads_every_key() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "http://localhost:3000"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cors_origin.unwrap(), "http://localhost:3000");
    }

    #[test]
    fn blank_origin_means_any_origin() {
        assert!(load(&[("CORS_ORIGIN", "  ")]).unwrap().cors_origin.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            load(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".to_string())
        );
        assert_eq!(
            load(&[("HOST", "localhost:80")]).unwrap_err(),
            ConfigError::InvalidHost("localhost:80".to_string())
        );
        assert!(matches!(
            load(&[("CORS_ORIGIN", "http://bad\norigin")]),
            Err(ConfigError::InvalidCorsOrigin(_))
        ));
    }
}

//! Server configuration.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing filter directives, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Allow any origin, method and header
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_filter() -> String {
    "info,accrue=debug".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// The request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The address to bind. A host that is not an IP address falls back to
    /// all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.host.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(e) => {
                warn!("Invalid host '{}' ({}), binding to 0.0.0.0", self.host, e);
                IpAddr::from([0, 0, 0, 0])
            }
        };
        SocketAddr::new(ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.cors_permissive);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ServerConfig::from_toml("port = 8080\nlog_filter = \"warn\"\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ServerConfig::from_toml("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::from_toml("host = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));

        let config = ServerConfig::from_toml("host = \"::1\"\n").unwrap();
        assert_eq!(config.socket_addr().ip(), IpAddr::from([0, 0, 0, 0, 0, 0, 0, 1]));
    }

    #[test]
    fn test_unparseable_host_binds_all_interfaces() {
        let config = ServerConfig::from_toml("host = \"not-a-host\"\nport = 9000\n").unwrap();
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 9000)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml("port = \"not a port\"").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}

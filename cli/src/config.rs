use gaia_client::{Connection, Scheme, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration file format for persistent settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Which node to talk to and how
    pub node: NodeConfig,
    /// Logger settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// Default request timeout in seconds
    pub timeout_seconds: u64,
    /// Trust any TLS certificate; only for local nodes with self-signed certs
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    pub log_to_file: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            accept_invalid_certs: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_to_file: false,
        }
    }
}

impl NodeConfig {
    pub fn connection(&self) -> Connection {
        Connection::new(self.scheme, self.host.clone(), self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

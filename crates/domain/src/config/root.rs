use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::{UpstreamConfig, MAX_RETRIES_LIMIT};

const LOCAL_CONFIG_PATH: &str = "stubdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/stubdns/config.toml";

/// Main configuration structure for stubdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Upstream nameserver and query policy
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. stubdns.toml in current directory
    /// 3. /etc/stubdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server_address {
            self.upstream.server_address = server;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.upstream.timeout_ms = timeout_ms;
        }
        if let Some(retries) = overrides.max_retries {
            self.upstream.max_retries = retries;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.upstream.server_address.is_ipv4() {
            return Err(ConfigError::Validation(format!(
                "Upstream server {} is not an IPv4 endpoint",
                self.upstream.server_address
            )));
        }

        if self.upstream.server_address.port() == 0 {
            return Err(ConfigError::Validation(
                "Upstream server port cannot be 0".to_string(),
            ));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0 ms".to_string(),
            ));
        }

        if self.upstream.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::Validation(format!(
                "max_retries {} exceeds limit of {}",
                self.upstream.max_retries, MAX_RETRIES_LIMIT
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server_address: Option<SocketAddr>,
    pub timeout_ms: Option<u64>,
    pub max_retries: Option<u32>,
    pub log_level: Option<String>,
}

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound accepted for `max_retries`.
pub const MAX_RETRIES_LIMIT: u32 = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_server_address")]
    pub server_address: SocketAddr,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Additional attempts after the first one times out or fails transiently.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_server_address() -> SocketAddr {
    SocketAddr::from(([8, 8, 8, 8], 53))
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_max_retries() -> u32 {
    2
}

use std::time::Duration;

use serde::Deserialize;

use crate::TransportOptions;

/// Connection settings for one coordinator member.
///
/// Deserializable from configuration files; every field has the coordinator's
/// conventional default, so `Config::default()` targets
/// `http://localhost:8008`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Coordinator hostname.
    pub host: String,
    /// Coordinator REST API port.
    pub port: String,
    /// Whether to use `https` for the base URL. Certificate validation uses
    /// platform trust roots.
    pub ssl_enabled: bool,
    /// Maximum retries after the initial attempt on transient failures.
    pub max_retries: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: "8008".to_owned(),
            ssl_enabled: false,
            max_retries: 3,
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Base URL for the member, `http[s]://{host}:{port}` by `ssl_enabled`.
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl_enabled { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }

    pub(crate) fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            ..TransportOptions::default()
        }
    }
}

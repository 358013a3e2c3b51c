//! `patroni-http` is an async HTTP client for the Patroni REST management
//! API.
//!
//! The crate has two layers:
//! - [`Transport`] — the five-verb HTTP client with bounded retries on
//!   transient failures and uniform response classification.
//! - [`PatroniClient`] — cluster-role health probes (`is_primary`,
//!   `is_standby_leader`, `is_leader`) that downgrade transport failures to
//!   `false` plus a bounded error log.

mod cluster;
mod config;
mod error;
mod error_log;
mod options;
mod response;
mod transport;

pub use cluster::PatroniClient;
pub use config::Config;
pub use error::TransportError;
pub use error_log::{ErrorLog, DEFAULT_ERROR_CAPACITY};
pub use options::TransportOptions;
pub use response::ApiResponse;
pub use transport::Transport;

pub type Result<T> = std::result::Result<T, TransportError>;

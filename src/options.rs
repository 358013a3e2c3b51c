use std::time::Duration;

/// Configures HTTP timeout and retry behavior for [`crate::Transport`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportOptions {
    /// Per-request timeout, bounding both connection establishment and the
    /// read phase of a single attempt.
    pub timeout: Duration,
    /// Maximum number of retries after the initial attempt. Zero means a
    /// transient failure is terminal immediately.
    pub max_retries: usize,
    /// Base retry backoff in milliseconds (exponential strategy).
    pub retry_backoff_ms: u64,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_backoff_ms: 250,
        }
    }
}

use crate::{Config, ErrorLog, Transport};

/// Cluster-role facade over [`Transport`].
///
/// Answers "is this member the primary / leader / standby leader" via HEAD
/// probes against the coordinator's health-check endpoints. Probes never
/// propagate transport failures: a failed probe reports `false` and records
/// the failure in a bounded error log, readable afterwards via
/// [`PatroniClient::errors`]. Callers needing to distinguish "unreachable"
/// from "confirmed not in role" must inspect that log.
#[derive(Debug)]
pub struct PatroniClient {
    transport: Transport,
    errors: ErrorLog,
}

impl PatroniClient {
    /// Creates a client for the member described by `config`.
    pub fn new(config: Config) -> Self {
        let transport = Transport::new(config.base_url()).with_options(config.transport_options());
        Self {
            transport,
            errors: ErrorLog::default(),
        }
    }

    /// Replaces the error log with one retaining at most `capacity` entries.
    pub fn with_error_capacity(mut self, capacity: usize) -> Self {
        self.errors = ErrorLog::with_capacity(capacity);
        self
    }

    /// Whether the member currently holds the primary role.
    pub async fn is_primary(&self) -> bool {
        self.probe("/primary").await
    }

    /// Whether the member is the leader of a standby cluster.
    pub async fn is_standby_leader(&self) -> bool {
        self.probe("/standby-leader").await
    }

    /// Whether the member holds the leader lock.
    pub async fn is_leader(&self) -> bool {
        self.probe("/leader").await
    }

    /// Probe-failure descriptions accumulated so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.snapshot()
    }

    // A probe is true only on an exact 200. Any transport failure is
    // downgraded to false with one log entry; a non-200 success (e.g. 204)
    // is false without one.
    async fn probe(&self, path: &str) -> bool {
        match self.transport.head(path).await {
            Ok(response) => response.status() == 200,
            Err(err) => {
                tracing::debug!(path, error = %err, "health probe failed");
                self.errors.push(format!("probe {path} failed: {err}"));
                false
            }
        }
    }

    /// The underlying transport, for callers needing more than the boolean
    /// probes. Failures from direct transport calls are hard errors, not
    /// log entries.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

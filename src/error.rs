/// Error type returned by this crate.
///
/// Exactly three categories, each programmatically distinguishable so
/// callers can decide whether to retry at a higher level or surface the
/// failure to an operator.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A connection or timeout failure persisted past the retry budget.
    #[error("max retries reached after {attempts} attempts: {source}")]
    RetryExhausted {
        /// Total attempts issued, including the initial one.
        attempts: usize,
        /// The transient error observed on the last attempt.
        #[source]
        source: reqwest::Error,
    },
    /// The coordinator returned a 4xx/5xx status.
    #[error("HTTP error {status}: {reason}")]
    HttpStatus { status: u16, reason: String },
    /// Anything outside the above: an unrecognized status class, a success
    /// body that is not valid JSON, or a request failure that is not a
    /// connection or timeout error.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

use std::time::Duration;

use reqwest::{header, Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::{ApiResponse, Result, TransportError, TransportOptions};

/// HTTP client for a single Patroni coordinator member.
///
/// Holds an immutable base URL and retry/timeout configuration; every call
/// issues one logical request under the retry policy and classifies the
/// outcome into an [`ApiResponse`] or a [`TransportError`]. Instances are
/// cheap to clone and safe to share across concurrent callers.
#[derive(Clone, Debug)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    options: TransportOptions,
}

impl Transport {
    /// Creates a transport against a base URL such as
    /// `http://localhost:8008`.
    ///
    /// The URL is not validated here; a malformed base URL surfaces as a
    /// failure on the first request.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            options: TransportOptions::default(),
        }
    }

    /// Applies transport options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: TransportOptions) -> Self {
        self.options = opts;
        self
    }

    /// Issues a GET request.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::GET, path, None).await
    }

    /// Issues a HEAD request. The classified response is always
    /// [`ApiResponse::Empty`] since HEAD never carries a body.
    pub async fn head(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::HEAD, path, None).await
    }

    /// Issues a POST request with `data` serialized as the JSON body.
    pub async fn post<T: Serialize>(&self, path: &str, data: &T) -> Result<ApiResponse> {
        self.execute(Method::POST, path, Some(to_json_body(data)?))
            .await
    }

    /// Issues a PUT request with `data` serialized as the JSON body.
    pub async fn put<T: Serialize>(&self, path: &str, data: &T) -> Result<ApiResponse> {
        self.execute(Method::PUT, path, Some(to_json_body(data)?))
            .await
    }

    /// Issues a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
    ) -> Result<ApiResponse> {
        let url = self.resolve(path)?;
        let mut attempt = 0usize;
        loop {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .timeout(self.options.timeout);
            if let Some(payload) = &body {
                request = request
                    .header(header::CONTENT_TYPE, "application/json")
                    .json(payload);
            }

            tracing::debug!(%method, %url, attempt, "issuing request");

            // Both sending the request and draining the body count as one
            // attempt; a timeout in either phase is transient.
            let outcome = match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    response.text().await.map(|text| (status, text))
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok((status, text)) => return classify_response(status, &text),
                Err(err) if is_transient(&err) && attempt < self.options.max_retries => {
                    attempt += 1;
                    tracing::warn!(attempt, error = %err, "transient request failure, retrying");
                    self.wait_before_retry(attempt).await;
                }
                Err(err) if is_transient(&err) => {
                    return Err(TransportError::RetryExhausted {
                        attempts: attempt + 1,
                        source: err,
                    });
                }
                Err(err) => {
                    return Err(TransportError::Unexpected(format!(
                        "request failed: {err}"
                    )));
                }
            }
        }
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|err| {
            TransportError::Unexpected(format!("invalid base URL {:?}: {err}", self.base_url))
        })?;
        base.join(path)
            .map_err(|err| TransportError::Unexpected(format!("invalid path {path:?}: {err}")))
    }

    /// Sleeps before retry `attempt` (1-based), doubling the configured base
    /// backoff each time.
    async fn wait_before_retry(&self, attempt: usize) {
        let exp = attempt.saturating_sub(1).min(16) as u32;
        let multiplier = 1u64 << exp;
        let delay_ms = self.options.retry_backoff_ms.saturating_mul(multiplier);
        sleep(Duration::from_millis(delay_ms)).await;
    }
}

/// Whether a request error is eligible for retry: connection establishment
/// and timeout failures only. HTTP error statuses never reach this check.
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

fn to_json_body<T: Serialize>(data: &T) -> Result<JsonValue> {
    serde_json::to_value(data)
        .map_err(|err| TransportError::Unexpected(format!("unserializable request body: {err}")))
}

fn classify_response(status: StatusCode, body: &str) -> Result<ApiResponse> {
    let code = status.as_u16();
    if status.is_success() {
        if body.is_empty() {
            return Ok(ApiResponse::Empty { status: code });
        }
        return serde_json::from_str(body)
            .map(|parsed| ApiResponse::Body {
                status: code,
                body: parsed,
            })
            .map_err(|err| {
                TransportError::Unexpected(format!("invalid JSON in success body: {err}"))
            });
    }

    let reason = status.canonical_reason().unwrap_or("").to_owned();
    if status.is_client_error() || status.is_server_error() {
        return Err(TransportError::HttpStatus {
            status: code,
            reason,
        });
    }
    Err(TransportError::Unexpected(format!(
        "unrecognized response class: {code} - {reason}"
    )))
}

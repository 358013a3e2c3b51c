use serde_json::Value as JsonValue;

/// Classified success response from the coordinator.
///
/// A 2xx status with no body (HEAD probes, 204 on PUT/DELETE) carries only
/// the status code; a 2xx status with a body carries the parsed JSON value.
/// Failures never reach this type — they are [`crate::TransportError`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResponse {
    /// 2xx with an empty body.
    Empty { status: u16 },
    /// 2xx with a valid JSON body.
    Body { status: u16, body: JsonValue },
}

impl ApiResponse {
    /// Numeric HTTP status code of the response.
    pub fn status(&self) -> u16 {
        match self {
            Self::Empty { status } | Self::Body { status, .. } => *status,
        }
    }

    /// Parsed JSON body, if the response carried one.
    pub fn body(&self) -> Option<&JsonValue> {
        match self {
            Self::Empty { .. } => None,
            Self::Body { body, .. } => Some(body),
        }
    }

    /// Whether the response body was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the BYOK API client
#[derive(Debug, Error)]
pub enum ByokError {
    /// Transport failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx response, classified by status
    #[error("API error ({}): {}", .0.status_code, .0.message)]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A 2xx response whose body was empty or did not match the expected shape
    #[error("Serialization error: {0}")]
    Serde(String),

    /// The caller cancelled a stream before it terminated
    #[error("stream decoding cancelled")]
    Cancelled,

    /// The byte source closed before `[DONE]` or a `finish_reason` arrived
    #[error("stream closed after {chunks} chunk(s) without a terminal event")]
    IncompleteStream {
        /// Number of content chunks delivered before the source closed
        chunks: usize,
    },
}

/// Failure category derived from the HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// 401: invalid or missing API key / user credentials
    Authentication,
    /// 402: no wallet, insufficient balance, or wallet frozen
    PaymentRequired,
    /// 403: game not active, tier unavailable, consent not granted
    Forbidden,
    /// 404: resource not found
    NotFound,
    /// 422: validation failed
    Validation,
    /// 429: rate limited or quota exceeded
    RateLimited,
    /// 502: upstream AI provider error
    Provider,
    /// Any other non-2xx status
    Other,
}

impl ErrorCategory {
    /// Maps a status code to its category
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            401 => Self::Authentication,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::Validation,
            429 => Self::RateLimited,
            502 => Self::Provider,
            _ => Self::Other,
        }
    }

    const fn carries_details(self) -> bool {
        matches!(self, Self::Validation | Self::Other)
    }
}

/// Classified API error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    pub status_code: u16,
    /// Category derived from `status_code`
    pub category: ErrorCategory,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code
    #[serde(default)]
    pub code: Option<String>,
    /// Error type string
    #[serde(default)]
    pub error_type: Option<String>,
    /// Structured details (validation and uncategorized errors only)
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    /// Seconds from the `Retry-After` header, when numeric
    #[serde(default)]
    pub retry_after: Option<u64>,
}

impl ByokError {
    /// Returns the classified API error, if this is one
    #[must_use]
    pub const fn api(&self) -> Option<&ApiErrorObject> {
        match self {
            Self::Api(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the error category for API errors
    #[must_use]
    pub fn category(&self) -> Option<ErrorCategory> {
        self.api().map(|obj| obj.category)
    }

    /// Server-advised wait before retrying a rate-limited call
    ///
    /// Only rate-limit errors report a value; the client itself never retries.
    #[must_use]
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        self.api()
            .filter(|obj| obj.category == ErrorCategory::RateLimited)
            .and_then(|obj| obj.retry_after)
            .map(std::time::Duration::from_secs)
    }

    /// Determines if a caller-side retry is reasonable
    ///
    /// Retryable errors include rate limits (429), timeouts (408),
    /// server errors (5xx), and connection failures.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(obj) => crate::retry::is_retryable_status(obj.status_code),
            Self::Reqwest(e) => e.is_timeout() || e.is_connect(),
            Self::Config(_)
            | Self::Serde(_)
            | Self::Cancelled
            | Self::IncompleteStream { .. } => false,
        }
    }
}

/// Maps a serde deserialization error to a `ByokError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> ByokError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    ByokError::Serde(format!("{e}: {snippet}"))
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Message(String),
    Object {
        #[serde(default)]
        message: Option<serde_json::Value>,
        #[serde(default)]
        code: Option<serde_json::Value>,
        #[serde(default, rename = "type")]
        kind: Option<serde_json::Value>,
        #[serde(default)]
        details: Option<serde_json::Value>,
    },
    Other(serde::de::IgnoredAny),
}

fn as_string(v: Option<serde_json::Value>) -> Option<String> {
    match v {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Classifies a non-2xx response into a `ByokError::Api`
///
/// Never fails: bodies that are not JSON, or JSON without an `error` field,
/// fall back to the status reason phrase.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> ByokError {
    let status_code = status.as_u16();
    let category = ErrorCategory::from_status(status_code);
    let fallback = status.canonical_reason().map_or_else(
        || format!("BYOK API error ({status_code})"),
        ToString::to_string,
    );

    let mut message = None;
    let mut code = None;
    let mut error_type = None;
    let mut details = None;

    match serde_json::from_slice::<ErrorEnvelope>(body).ok().and_then(|e| e.error) {
        Some(ErrorBody::Message(m)) => message = Some(m),
        Some(ErrorBody::Object {
            message: m,
            code: c,
            kind,
            details: d,
        }) => {
            message = as_string(m);
            code = as_string(c);
            error_type = as_string(kind);
            details = d.filter(|_| category.carries_details());
        }
        Some(ErrorBody::Other(_)) | None => {}
    }

    ByokError::Api(ApiErrorObject {
        status_code,
        category,
        message: message.unwrap_or(fallback),
        code,
        error_type,
        details,
        retry_after: crate::retry::parse_retry_after(headers),
    })
}

/// Passes 2xx responses through, classifying everything else
///
/// # Errors
///
/// Returns `ByokError::Api` for any non-2xx status.
pub fn classify(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Result<(), ByokError> {
    if status.is_success() {
        return Ok(());
    }
    Err(reject(status, headers, body))
}

/// Classifies a response already known to be non-2xx, logging the failure
pub(crate) fn reject(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> ByokError {
    let err = deserialize_api_error(status, headers, body);
    tracing::warn!(status = status.as_u16(), error = %err, "BYOK request failed");
    err
}

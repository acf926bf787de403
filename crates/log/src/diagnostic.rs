//! Error values carried through log calls
//!
//! The error formatter does not care about concrete error types. It asks an
//! [`EnrichedError`] for three optional pieces: a trace, the request that
//! failed and the response that came back. Plain errors only answer the
//! first; [`HttpError`] answers all three.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error value with optional diagnostic capabilities
pub trait EnrichedError: fmt::Debug + Send + Sync {
    /// Human-readable trace text
    fn trace(&self) -> Option<String>;

    /// Request payload that produced the error
    fn request(&self) -> Option<&Value> {
        None
    }

    /// Response that came back with the error
    fn response(&self) -> Option<&ErrorResponse> {
        None
    }
}

/// HTTP response attached to an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Raw response body, possibly JSON-encoded
    pub data: String,
    /// Status code
    pub status: u16,
    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ErrorResponse {
    /// Create a response with a status and raw body
    pub fn new(status: u16, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            status,
            headers: BTreeMap::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Error raised by an HTTP exchange, carrying the request and response
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    message: String,
    request: Option<Value>,
    response: Option<ErrorResponse>,
}

impl HttpError {
    /// Create an error with a message and no payloads
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            request: None,
            response: None,
        }
    }

    /// Attach the request payload
    ///
    /// A payload that cannot be represented as JSON is dropped.
    #[must_use]
    pub fn with_request(mut self, request: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(request) {
            self.request = Some(value);
        }
        self
    }

    /// Attach the response
    #[must_use]
    pub fn with_response(mut self, response: ErrorResponse) -> Self {
        self.response = Some(response);
        self
    }

    /// Error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl EnrichedError for HttpError {
    fn trace(&self) -> Option<String> {
        Some(render_trace(self))
    }

    fn request(&self) -> Option<&Value> {
        self.request.as_ref()
    }

    fn response(&self) -> Option<&ErrorResponse> {
        self.response.as_ref()
    }
}

/// Adapter for any [`std::error::Error`]
#[derive(Debug)]
pub(crate) struct PlainError<E>(pub(crate) E);

impl<E> EnrichedError for PlainError<E>
where
    E: StdError + Send + Sync + 'static,
{
    fn trace(&self) -> Option<String> {
        Some(render_trace(&self.0))
    }
}

/// Trace captured from a borrowed error that cannot be kept
#[derive(Debug, Clone)]
pub(crate) struct CapturedError {
    trace: String,
}

impl CapturedError {
    pub(crate) fn capture(err: &(dyn StdError + 'static)) -> Self {
        Self {
            trace: render_trace(err),
        }
    }
}

impl EnrichedError for CapturedError {
    fn trace(&self) -> Option<String> {
        Some(self.trace.clone())
    }
}

/// Render an error and its `source()` chain, one indented line per cause.
pub fn render_trace(err: &(dyn StdError + 'static)) -> String {
    let mut trace = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(trace, "\n    caused by: {cause}");
        source = cause.source();
    }
    trace
}

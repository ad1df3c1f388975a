use crate::error_code::KnownStatus;
use crate::transport::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Builder field or environment variable that caused the error (e.g., "api_key", "BROWSER_USE_BASE_URL")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Component that produced the error (e.g., "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// An error response (non-2xx) returned by the Browser Use API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error (status {status}): {}", display_text(.message, .body))]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable message; empty when none could be derived.
    pub message: String,
    /// Raw response body, verbatim.
    pub body: String,
}

impl ApiError {
    /// Classify a failed response.
    ///
    /// The message is taken from the first string among the `message`, `error`
    /// and `detail` fields of a JSON object body. When none is present the
    /// fixed message for a [`KnownStatus`] is used, otherwise the message is
    /// left empty. The raw body is always kept.
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = Self::message_from_body(&body)
            .or_else(|| {
                KnownStatus::from_http_status(status).map(|s| s.fallback_message().to_string())
            })
            .unwrap_or_default();

        Self {
            status,
            message,
            body,
        }
    }

    fn message_from_body(body: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = json.as_object()?;
        ["message", "error", "detail"]
            .iter()
            .find_map(|key| object.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }

    /// The known status this error maps to, if any.
    pub fn known_status(&self) -> Option<KnownStatus> {
        KnownStatus::from_http_status(self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    pub fn is_validation_error(&self) -> bool {
        self.status == 422
    }

    pub fn is_rate_limit_error(&self) -> bool {
        self.status == 429
    }
}

/// Unified error type for the Browser Use client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// The request never got a clean answer (connect, timeout, body read).
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered successfully but the body did not have the expected shape.
    #[error("Decode error: {message}: {source}")]
    Decode {
        message: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("task did not complete within timeout ({timeout:?}): {source}")]
    Timeout {
        timeout: Duration,
        #[source]
        source: tokio::time::error::Elapsed,
    },

    #[error("waiting for task {task_id} was cancelled")]
    Cancelled { task_id: String },
}

fn display_text<'a>(message: &'a str, body: &'a str) -> &'a str {
    if message.is_empty() {
        body
    } else {
        message
    }
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a configuration error without context.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a configuration error with structured context.
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The API error carried by this error, if the server answered with one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_not_found)
    }

    pub fn is_bad_request(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_bad_request)
    }

    pub fn is_validation_error(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_validation_error)
    }

    pub fn is_rate_limit_error(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_rate_limit_error)
    }

    /// True when the completion poller gave up because its deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

fn as_api_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a ApiError> {
    if let Some(e) = err.downcast_ref::<Error>() {
        return e.api_error();
    }
    err.downcast_ref::<ApiError>()
}

/// Returns true if `err` is an API error with status 404.
///
/// Accepts any error type; anything that is not one of this crate's errors
/// yields `false`.
pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    as_api_error(err).is_some_and(ApiError::is_not_found)
}

/// Returns true if `err` is an API error with status 400.
pub fn is_bad_request(err: &(dyn std::error::Error + 'static)) -> bool {
    as_api_error(err).is_some_and(ApiError::is_bad_request)
}

/// Returns true if `err` is an API error with status 422.
pub fn is_validation_error(err: &(dyn std::error::Error + 'static)) -> bool {
    as_api_error(err).is_some_and(ApiError::is_validation_error)
}

/// Returns true if `err` is an API error with status 429.
pub fn is_rate_limit_error(err: &(dyn std::error::Error + 'static)) -> bool {
    as_api_error(err).is_some_and(ApiError::is_rate_limit_error)
}

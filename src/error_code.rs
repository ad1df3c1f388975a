//! Known HTTP status codes returned by the Browser Use API.
//!
//! The service documents a small set of failure statuses. Each one carries a
//! fixed human-readable message that is used when the response body does not
//! provide a structured one.
//!
//! ## Known statuses
//!
//! | Status | Name                | Fallback message                          |
//! |--------|---------------------|-------------------------------------------|
//! | 400    | `bad_request`       | Session is stopped or has running task    |
//! | 404    | `not_found`         | Resource not found                        |
//! | 422    | `validation_failed` | Request validation failed                 |
//! | 429    | `rate_limited`      | Too many concurrent active sessions       |
//! | 500    | `server_error`      | Internal server error                     |
//!
//! ## Example
//!
//! ```rust
//! use browser_use_sdk::error_code::KnownStatus;
//!
//! let status = KnownStatus::from_http_status(404).unwrap();
//! assert_eq!(status.fallback_message(), "Resource not found");
//! assert_eq!(status.name(), "not_found");
//! assert!(KnownStatus::from_http_status(418).is_none());
//! ```

use std::fmt;

/// A status code the API is known to use for failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownStatus {
    /// 400: the session is stopped or already has a running task
    BadRequest,
    /// 404: task or session does not exist
    NotFound,
    /// 422: request body failed validation
    ValidationFailed,
    /// 429: too many concurrent active sessions
    RateLimited,
    /// 500: internal server error
    ServerError,
}

impl KnownStatus {
    /// Maps an HTTP status code to a known status, if any.
    pub fn from_http_status(status: u16) -> Option<Self> {
        let known = match status {
            400 => Self::BadRequest,
            404 => Self::NotFound,
            422 => Self::ValidationFailed,
            429 => Self::RateLimited,
            500 => Self::ServerError,
            _ => return None,
        };
        Some(known)
    }

    /// Returns the numeric HTTP status code.
    #[inline]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::ValidationFailed => 422,
            Self::RateLimited => 429,
            Self::ServerError => 500,
        }
    }

    /// Returns the stable snake_case name (e.g., `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::NotFound => "not_found",
            Self::ValidationFailed => "validation_failed",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
        }
    }

    /// Returns the message used when the body carries no structured one.
    #[inline]
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Session is stopped or has running task",
            Self::NotFound => "Resource not found",
            Self::ValidationFailed => "Request validation failed",
            Self::RateLimited => "Too many concurrent active sessions",
            Self::ServerError => "Internal server error",
        }
    }
}

impl fmt::Display for KnownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.http_status(), self.name())
    }
}

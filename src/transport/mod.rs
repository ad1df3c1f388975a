//! HTTP transport: one request in, one decoded response or classified error out.

mod http;

pub use http::{HttpTransport, API_KEY_HEADER, REQUEST_ID_HEADER};

/// Failures where the request never got a clean answer from the server.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

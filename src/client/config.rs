//! Immutable client configuration, resolved once at build time.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.browser-use.com/api/v2";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted when no API key is given explicitly.
pub const ENV_API_KEY: &str = "BROWSER_USE_API_KEY";
pub const ENV_BASE_URL: &str = "BROWSER_USE_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "BROWSER_USE_HTTP_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "BROWSER_USE_PROXY_URL";

/// Settings shared by every request a client makes.
///
/// Created once by [`BrowserUseClientBuilder`](super::BrowserUseClientBuilder)
/// and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    pub proxy_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
            proxy_url: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}

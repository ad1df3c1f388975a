use crate::client::config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT, ENV_API_KEY, ENV_BASE_URL,
    ENV_HTTP_TIMEOUT_SECS, ENV_PROXY_URL,
};
use crate::client::core::BrowserUseClient;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`BrowserUseClient`].
///
/// Anything not set explicitly falls back to an environment variable and then
/// to a built-in default:
/// - `BROWSER_USE_API_KEY` (required when no key is given)
/// - `BROWSER_USE_BASE_URL` (default `https://api.browser-use.com/api/v2`)
/// - `BROWSER_USE_HTTP_TIMEOUT_SECS` (default 30)
/// - `BROWSER_USE_PROXY_URL`
#[derive(Default)]
pub struct BrowserUseClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    proxy_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl BrowserUseClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// API key sent as `X-Browser-Use-API-Key`. An empty key counts as unset.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL (useful for staging or mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request HTTP timeout. A zero duration means the default (30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Bring your own `reqwest::Client`. Timeout and proxy settings are not applied to it.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client. Fails before any network call when no API key is available.
    pub fn build(mut self) -> Result<BrowserUseClient> {
        let http_client = self.http_client.take();
        let config = Arc::new(self.resolve_config(|name| std::env::var(name).ok())?);

        let transport = match http_client {
            Some(client) => HttpTransport::with_client(config, client),
            None => HttpTransport::new(config)?,
        };

        Ok(BrowserUseClient::from_transport(transport))
    }

    /// Resolve explicit settings, then `env`, then defaults.
    pub(crate) fn resolve_config<F>(&self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let api_key = non_empty(self.api_key.clone())
            .or_else(|| non_empty(env(ENV_API_KEY)))
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!(
                        "API key is required: provide it via the builder or the {} environment variable",
                        ENV_API_KEY
                    ),
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("client_builder"),
                )
            })?;

        let base_url = non_empty(self.base_url.clone())
            .or_else(|| non_empty(env(ENV_BASE_URL)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone())
                    .with_source("client_builder"),
            )
        })?;

        let timeout = match self.timeout.filter(|t| !t.is_zero()) {
            Some(t) => t,
            None => match env(ENV_HTTP_TIMEOUT_SECS) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or_else(|| {
                        Error::configuration_with_context(
                            "HTTP timeout must be a positive number of seconds",
                            ErrorContext::new()
                                .with_field_path(ENV_HTTP_TIMEOUT_SECS)
                                .with_details(raw.clone())
                                .with_source("client_builder"),
                        )
                    })?,
                None => DEFAULT_HTTP_TIMEOUT,
            },
        };

        let mut config = ClientConfig::new(api_key, base_url).with_timeout(timeout);
        let proxy_url = non_empty(self.proxy_url.clone()).or_else(|| non_empty(env(ENV_PROXY_URL)));
        if let Some(proxy) = proxy_url {
            config = config.with_proxy_url(proxy);
        }
        Ok(config)
    }
}

use crate::client::ClientConfig;
use crate::error::ApiError;
use crate::{Error, ErrorContext, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Proxy};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::TransportError;

/// Credential header attached to every request.
pub const API_KEY_HEADER: &str = "X-Browser-Use-API-Key";
/// Per-request correlation id. The service may ignore it; it links our tracing events.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Issues single requests against the configured base URL.
///
/// No retries happen here. Connection reuse is whatever `reqwest` pools.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Build a transport with its own `reqwest::Client` derived from `config`.
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_details(proxy_url.clone())
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, config })
    }

    /// Use a caller-provided `reqwest::Client`. The configured timeout and
    /// proxy are then the caller's responsibility.
    pub fn with_client(config: Arc<ClientConfig>, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and return the raw success body.
    ///
    /// An empty success body yields an empty string. Non-2xx responses become
    /// [`Error::Api`]; connection and body-read failures become [`Error::Transport`].
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<String> {
        let url = format!("{}{}", self.config.base_url, path);
        let request_id = Uuid::new_v4().to_string();

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(REQUEST_ID_HEADER, &request_id);

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let start = std::time::Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Body(e)))?;

        debug!(
            method = method.as_str(),
            path,
            request_id = request_id.as_str(),
            http_status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "browser-use request completed"
        );

        if !status.is_success() {
            return Err(Error::Api(ApiError::from_response(status.as_u16(), text)));
        }

        Ok(text)
    }

    /// Send one request and decode the success body as `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T> {
        let text = self.execute(method, path, body).await?;
        decode_body(&text)
    }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| Error::Decode {
        message: format!(
            "failed to decode response as {}",
            std::any::type_name::<T>()
        ),
        body: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Echo {
        ok: bool,
    }

    fn transport_for(server: &mockito::ServerGuard) -> HttpTransport {
        let config = ClientConfig::new("test-key", server.url());
        HttpTransport::new(Arc::new(config)).expect("transport")
    }

    #[tokio::test]
    async fn attaches_credential_and_omits_content_type_without_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header(API_KEY_HEADER, "test-key")
            .match_header("content-type", Matcher::Missing)
            .match_header(REQUEST_ID_HEADER, Matcher::Any)
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let echo: Echo = transport_for(&server)
            .execute_json(Method::GET, "/ping", None)
            .await
            .expect("request");
        assert!(echo.ok);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sets_content_type_when_body_present() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/things")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"a": 1})))
            .with_status(201)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let body = serde_json::json!({"a": 1});
        let _: Echo = transport_for(&server)
            .execute_json(Method::POST, "/things", Some(&body))
            .await
            .expect("request");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_classified() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"detail":"Task not found"}"#)
            .create_async()
            .await;

        let err = transport_for(&server)
            .execute(Method::GET, "/missing", None)
            .await
            .unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.status, 404);
        assert_eq!(api.message, "Task not found");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn empty_success_body_is_fine_without_result_type() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PATCH", "/noop")
            .with_status(204)
            .create_async()
            .await;

        let text = transport_for(&server)
            .execute(Method::PATCH, "/noop", None)
            .await
            .expect("request");
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/garbled")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let err = transport_for(&server)
            .execute_json::<Echo>(Method::GET, "/garbled", None)
            .await
            .unwrap_err();
        match err {
            Error::Decode { body, .. } => assert_eq!(body, "<html>oops</html>"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Nothing listens on port 9 (discard) on loopback in test environments.
        let config = ClientConfig::new("test-key", "http://127.0.0.1:9");
        let transport = HttpTransport::new(Arc::new(config)).expect("transport");
        let err = transport
            .execute(Method::GET, "/tasks", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "{err:?}");
        assert!(err.api_error().is_none());
    }
}

use crate::client::builder::BrowserUseClientBuilder;
use crate::client::config::ClientConfig;
use crate::tasks::TasksService;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;

/// Browser Use API client.
///
/// Cheap to clone; clones share the immutable configuration and the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct BrowserUseClient {
    transport: Arc<HttpTransport>,
}

impl BrowserUseClient {
    pub fn builder() -> BrowserUseClientBuilder {
        BrowserUseClientBuilder::new()
    }

    /// Create a client configured entirely from the environment
    /// (`BROWSER_USE_API_KEY` and friends).
    pub fn from_env() -> Result<Self> {
        BrowserUseClientBuilder::new().build()
    }

    /// Create a client with an explicit API key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        BrowserUseClientBuilder::new().api_key(api_key).build()
    }

    pub(crate) fn from_transport(transport: HttpTransport) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Task operations: create, fetch, stop, list, logs.
    pub fn tasks(&self) -> TasksService {
        TasksService::new(self.transport.clone())
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }
}

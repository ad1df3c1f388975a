//! Client entry point for the Browser Use API.
//!
//! Keep the public surface small: build a [`BrowserUseClient`] once, then reach
//! task operations through [`BrowserUseClient::tasks`].

pub mod builder;
pub mod config;
pub mod core;

pub use builder::BrowserUseClientBuilder;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT};
pub use core::BrowserUseClient;

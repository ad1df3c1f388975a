//! # browser-use-sdk
//!
//! Typed async client for the Browser Use cloud task API.
//!
//! Submit natural-language browsing tasks, wait for them to finish, and read
//! back their step-by-step traces, outputs, and log download links.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use browser_use_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> browser_use_sdk::Result<()> {
//!     // Reads BROWSER_USE_API_KEY when no key is given explicitly.
//!     let client = BrowserUseClient::from_env()?;
//!
//!     let task = client
//!         .tasks()
//!         .create_task(&CreateTaskRequest::new(
//!             "Search for the top 10 Hacker News posts and return the title and url.",
//!         ))
//!         .await?;
//!
//!     let result = task.complete(CompleteOptions::default()).await?;
//!     println!("{:?}: {}", result.status, result.output.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`Result`]. [`Error`] tells apart configuration
//! problems, transport failures (no clean answer), API errors (the server said
//! no), undecodable bodies, and poller timeouts/cancellation. Nothing is retried
//! automatically.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, and resolved configuration |
//! | [`tasks`] | Task requests/responses, handles, listing, completion polling |
//! | [`transport`] | Single-request HTTP transport |
//! | [`error`] | Error type and status predicates |
//! | [`error_code`] | Known API status codes and their fallback messages |

pub mod client;
pub mod error;
pub mod error_code;
pub mod prelude;
pub mod tasks;
pub mod transport;

pub use client::{BrowserUseClient, BrowserUseClientBuilder, ClientConfig};
pub use error::{
    is_bad_request, is_not_found, is_rate_limit_error, is_validation_error, ApiError, Error,
    ErrorContext,
};
pub use tasks::{CompleteOptions, CreateTaskRequest, ListTasksOptions, Task, TaskStatus, TaskView};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Re-exported so callers can build [`CompleteOptions::cancel_token`] tokens
/// without depending on `tokio-util` directly.
pub use tokio_util::sync::CancellationToken;

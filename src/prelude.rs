//! Minimal prelude for application code.

pub use crate::client::{BrowserUseClient, BrowserUseClientBuilder};
pub use crate::error::{ApiError, Error};
pub use crate::tasks::{
    CompleteOptions, CreateTaskRequest, ListTasksOptions, LlmModel, Task, TaskListResponse,
    TaskStatus, TaskView, Vision,
};
pub use crate::CancellationToken;

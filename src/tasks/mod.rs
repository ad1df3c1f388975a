//! Browser automation tasks: creation, inspection, stopping, listing, and
//! waiting for completion.

mod completion;
mod handle;
mod list;
mod models;
mod service;
mod types;

pub use completion::{CompleteOptions, DEFAULT_COMPLETE_TIMEOUT, DEFAULT_POLL_INTERVAL};
pub use handle::Task;
pub use list::{ListTasksOptions, TaskItemView, TaskListResponse};
pub use models::{LlmModel, Vision};
pub use service::TasksService;
pub use types::{
    CreateTaskRequest, FileView, TaskCreatedResponse, TaskLogFileResponse, TaskStatus, TaskStep,
    TaskUpdateAction, TaskView, UpdateTaskRequest,
};

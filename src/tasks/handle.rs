use super::completion::CompleteOptions;
use super::service::TasksService;
use super::types::{TaskLogFileResponse, TaskView};
use crate::Result;

/// Handle to a task created through [`TasksService::create_task`].
///
/// Holds only identifiers; every method queries the service for fresh state.
#[derive(Debug, Clone)]
pub struct Task {
    id: String,
    session_id: String,
    service: TasksService,
}

impl Task {
    pub(crate) fn new(id: String, session_id: String, service: TasksService) -> Self {
        Self {
            id,
            session_id,
            service,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Browser session the task runs in.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn get(&self) -> Result<TaskView> {
        self.service.get_task(&self.id).await
    }

    pub async fn stop(&self) -> Result<TaskView> {
        self.service.stop_task(&self.id).await
    }

    /// Stop the task and its browser session.
    pub async fn stop_with_session(&self) -> Result<TaskView> {
        self.service.stop_task_and_session(&self.id).await
    }

    pub async fn get_logs(&self) -> Result<TaskLogFileResponse> {
        self.service.get_task_logs(&self.id).await
    }

    /// Wait for the task to finish or stop and return the final snapshot.
    ///
    /// Fetches once right away, then every `poll_interval` (default 2s),
    /// giving up after `timeout` (default 5min) with [`Error::Timeout`] or
    /// when the cancellation token fires with [`Error::Cancelled`]. A failed
    /// fetch is returned as-is and ends the wait.
    ///
    /// [`Error::Timeout`]: crate::Error::Timeout
    /// [`Error::Cancelled`]: crate::Error::Cancelled
    pub async fn complete(&self, options: CompleteOptions) -> Result<TaskView> {
        self.service.complete_task(&self.id, &options).await
    }
}

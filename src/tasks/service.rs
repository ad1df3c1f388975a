use super::completion::{poll_until_terminal, CompleteOptions};
use super::handle::Task;
use super::list::{ListTasksOptions, TaskListResponse};
use super::types::{
    CreateTaskRequest, TaskCreatedResponse, TaskLogFileResponse, TaskUpdateAction, TaskView,
    UpdateTaskRequest,
};
use crate::transport::HttpTransport;
use crate::Result;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

/// Task operations, addressed by task id.
///
/// Obtained from [`BrowserUseClient::tasks`](crate::BrowserUseClient::tasks).
#[derive(Debug, Clone)]
pub struct TasksService {
    transport: Arc<HttpTransport>,
}

impl TasksService {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Submit a new task and return a handle to it.
    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        let body = serde_json::to_value(request)?;
        let created: TaskCreatedResponse = self
            .transport
            .execute_json(Method::POST, "/tasks", Some(&body))
            .await?;

        info!(
            task_id = created.id.as_str(),
            session_id = created.session_id.as_str(),
            "browser-use task created"
        );
        Ok(Task::new(created.id, created.session_id, self.clone()))
    }

    pub async fn get_task(&self, task_id: &str) -> Result<TaskView> {
        self.transport
            .execute_json(Method::GET, &task_path(task_id), None)
            .await
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> Result<TaskView> {
        let body = serde_json::to_value(request)?;
        self.transport
            .execute_json(Method::PATCH, &task_path(task_id), Some(&body))
            .await
    }

    /// Stop the task; its browser session stays alive.
    pub async fn stop_task(&self, task_id: &str) -> Result<TaskView> {
        self.update_task(
            task_id,
            &UpdateTaskRequest {
                action: TaskUpdateAction::Stop,
            },
        )
        .await
    }

    /// Stop the task and tear down its browser session.
    pub async fn stop_task_and_session(&self, task_id: &str) -> Result<TaskView> {
        self.update_task(
            task_id,
            &UpdateTaskRequest {
                action: TaskUpdateAction::StopTaskAndSession,
            },
        )
        .await
    }

    /// Download link for the task's execution logs.
    pub async fn get_task_logs(&self, task_id: &str) -> Result<TaskLogFileResponse> {
        let path = format!("{}/logs", task_path(task_id));
        self.transport.execute_json(Method::GET, &path, None).await
    }

    /// Wait until the task is finished or stopped. See [`Task::complete`].
    pub async fn complete_task(
        &self,
        task_id: &str,
        options: &CompleteOptions,
    ) -> Result<TaskView> {
        poll_until_terminal(task_id, options, || self.get_task(task_id)).await
    }

    /// One page of tasks. `None` sends no query parameters.
    pub async fn list_tasks(&self, options: Option<&ListTasksOptions>) -> Result<TaskListResponse> {
        let path = options
            .map(ListTasksOptions::to_path)
            .unwrap_or_else(|| "/tasks".to_string());
        self.transport.execute_json(Method::GET, &path, None).await
    }
}

fn task_path(task_id: &str) -> String {
    format!("/tasks/{}", urlencoding::encode(task_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_ids_are_path_escaped() {
        assert_eq!(task_path("abc-123"), "/tasks/abc-123");
        assert_eq!(task_path("a/b"), "/tasks/a%2Fb");
        assert_eq!(task_path("a b"), "/tasks/a%20b");
        assert_eq!(task_path("a+b"), "/tasks/a%2Bb");
    }
}

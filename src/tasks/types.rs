//! Request and response types for the `/tasks` endpoints.

use super::models::{LlmModel, Vision};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Created,
    Started,
    Finished,
    Stopped,
}

impl TaskStatus {
    /// Finished and stopped tasks never run again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Stopped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Started => "started",
            Self::Finished => "finished",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action accepted by `PATCH /tasks/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskUpdateAction {
    Stop,
    StopTaskAndSession,
}

/// Body of `POST /tasks`.
///
/// Only `task` is required. Every other field is sent only when set, so
/// `Some(0)` or `Some(String::new())` reach the server as given while `None`
/// is left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<LlmModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u32>,
    /// JSON schema (as a string) the final output must follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_vault_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_elements: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<Vision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt_extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge_ground_truth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge_llm: Option<LlmModel>,
}

impl CreateTaskRequest {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..Default::default()
        }
    }

    pub fn llm(mut self, llm: impl Into<LlmModel>) -> Self {
        self.llm = Some(llm.into());
        self
    }

    pub fn start_url(mut self, url: impl Into<String>) -> Self {
        self.start_url = Some(url.into());
        self
    }

    pub fn max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Raw JSON schema string for the final output.
    pub fn structured_output(mut self, schema: impl Into<String>) -> Self {
        self.structured_output = Some(schema.into());
        self
    }

    /// Derive the output schema from `T`. Pair with [`TaskView::parsed_output`].
    pub fn structured_output_for<T: JsonSchema>(mut self) -> Result<Self> {
        let schema = schemars::schema_for!(T);
        self.structured_output = Some(serde_json::to_string(&schema)?);
        Ok(self)
    }

    /// Run inside an existing browser session.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Add one metadata entry.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add one secret the agent may type into pages without seeing it.
    pub fn secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn op_vault_id(mut self, vault_id: impl Into<String>) -> Self {
        self.op_vault_id = Some(vault_id.into());
        self
    }

    pub fn highlight_elements(mut self, enabled: bool) -> Self {
        self.highlight_elements = Some(enabled);
        self
    }

    pub fn flash_mode(mut self, enabled: bool) -> Self {
        self.flash_mode = Some(enabled);
        self
    }

    pub fn thinking(mut self, enabled: bool) -> Self {
        self.thinking = Some(enabled);
        self
    }

    pub fn vision(mut self, vision: impl Into<Vision>) -> Self {
        self.vision = Some(vision.into());
        self
    }

    pub fn system_prompt_extension(mut self, extension: impl Into<String>) -> Self {
        self.system_prompt_extension = Some(extension.into());
        self
    }

    pub fn judge(mut self, enabled: bool) -> Self {
        self.judge = Some(enabled);
        self
    }

    pub fn judge_ground_truth(mut self, truth: impl Into<String>) -> Self {
        self.judge_ground_truth = Some(truth.into());
        self
    }

    pub fn judge_llm(mut self, llm: impl Into<LlmModel>) -> Self {
        self.judge_llm = Some(llm.into());
        self
    }
}

/// Response of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreatedResponse {
    pub id: String,
    pub session_id: String,
}

/// Body of `PATCH /tasks/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateTaskRequest {
    pub action: TaskUpdateAction,
}

/// One agent step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStep {
    pub number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evaluation_previous_goal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_goal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
}

/// A file produced by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView {
    pub id: String,
    pub file_name: String,
}

/// Full snapshot of a task as returned by `GET /tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: String,
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub llm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<TaskStep>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_files: Vec<FileView>,
    #[serde(default)]
    pub browser_use_version: Option<String>,
    #[serde(default)]
    pub is_success: Option<bool>,
    #[serde(default)]
    pub judgement: Option<String>,
    #[serde(default)]
    pub judge_verdict: Option<bool>,
}

impl TaskView {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Decode the final output as `T`, for tasks created with a structured output schema.
    ///
    /// Returns `Ok(None)` while there is no output yet.
    pub fn parsed_output<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let Some(output) = self.output.as_deref() else {
            return Ok(None);
        };
        serde_json::from_str(output)
            .map(Some)
            .map_err(|source| Error::Decode {
                message: format!(
                    "task output is not a valid {}",
                    std::any::type_name::<T>()
                ),
                body: output.to_string(),
                source,
            })
    }

    /// Wall-clock run time, once the task has both started and finished.
    pub fn duration(&self) -> Option<chrono::Duration> {
        Some(self.finished_at? - self.started_at?)
    }
}

/// Response of `GET /tasks/{id}/logs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLogFileResponse {
    pub download_url: String,
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

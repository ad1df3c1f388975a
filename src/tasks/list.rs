//! Pagination and filtering for `GET /tasks`.

use super::types::{null_as_default, TaskStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Query options for listing tasks. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksOptions {
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
    pub session_id: Option<String>,
    pub filter_by: Option<TaskStatus>,
    /// Only tasks created at or after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only tasks created before this instant.
    pub before: Option<DateTime<Utc>>,
}

impl ListTasksOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn page_number(mut self, number: u32) -> Self {
        self.page_number = Some(number);
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn filter_by(mut self, status: TaskStatus) -> Self {
        self.filter_by = Some(status);
        self
    }

    pub fn after(mut self, after: DateTime<Utc>) -> Self {
        self.after = Some(after);
        self
    }

    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    /// Query pairs in wire order, only for the options that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        if let Some(number) = self.page_number {
            pairs.push(("pageNumber", number.to_string()));
        }
        if let Some(session_id) = &self.session_id {
            pairs.push(("sessionId", session_id.clone()));
        }
        if let Some(status) = self.filter_by {
            pairs.push(("filterBy", status.as_str().to_string()));
        }
        if let Some(after) = self.after {
            pairs.push(("after", after.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        if let Some(before) = self.before {
            pairs.push(("before", before.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        pairs
    }

    /// `/tasks` plus an encoded query string when any option is set.
    pub(crate) fn to_path(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return "/tasks".to_string();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("/tasks?{}", query)
    }
}

/// Lightweight task summary as it appears in list pages (no steps or files).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItemView {
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
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub browser_use_version: Option<String>,
    #[serde(default)]
    pub is_success: Option<bool>,
    #[serde(default)]
    pub judgement: Option<String>,
    #[serde(default)]
    pub judge_verdict: Option<bool>,
}

/// One page of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<TaskItemView>,
    pub total_items: u64,
    pub page_number: u32,
    pub page_size: u32,
}

impl TaskListResponse {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(u64::from(self.page_size))
    }

    /// Page numbers start at 1.
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page_number) < self.total_pages()
    }

    /// Options for the following page, keeping the filters of `current`.
    pub fn next_page_options(&self, current: &ListTasksOptions) -> Option<ListTasksOptions> {
        if !self.has_next_page() {
            return None;
        }
        let next = self.page_number.checked_add(1)?;
        Some(
            current
                .clone()
                .page_size(self.page_size)
                .page_number(next),
        )
    }
}

//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use browser_use_sdk::BrowserUseClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};

pub const TEST_API_KEY: &str = "bu_test_key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server with the test API key.
    pub fn client(&self) -> BrowserUseClient {
        BrowserUseClient::builder()
            .api_key(TEST_API_KEY)
            .base_url(&self.base_url)
            .build()
            .expect("client should build")
    }

    /// JSON response for `method path`, requiring the API key header.
    pub async fn mock_json(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_header("x-browser-use-api-key", TEST_API_KEY)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Raw error body for `method path`.
    pub async fn mock_error(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &str,
    ) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}

/// A task snapshot as the service would return it.
pub fn task_view_json(id: &str, status: &str) -> Value {
    let finished = matches!(status, "finished" | "stopped");
    json!({
        "id": id,
        "sessionId": "session-1",
        "llm": "browser-use-llm",
        "task": "Find the top Hacker News post",
        "status": status,
        "createdAt": "2025-06-01T10:00:00Z",
        "startedAt": "2025-06-01T10:00:02Z",
        "finishedAt": if finished { json!("2025-06-01T10:01:02Z") } else { Value::Null },
        "metadata": {"source": "tests"},
        "steps": [
            {
                "number": 1,
                "memory": "Opened the front page",
                "evaluationPreviousGoal": "Success",
                "nextGoal": "Read the first title",
                "url": "https://news.ycombinator.com",
                "screenshotUrl": null,
                "actions": ["{\"go_to_url\":{\"url\":\"https://news.ycombinator.com\"}}"]
            }
        ],
        "output": if finished { json!("Show HN: a thing") } else { Value::Null },
        "outputFiles": [],
        "browserUseVersion": "0.7.0",
        "isSuccess": if finished { json!(true) } else { Value::Null },
        "judgement": null,
        "judgeVerdict": null
    })
}

//! Advanced usage example
//!
//! Structured output, a cancellable wait with a custom deadline, error
//! classification and paging through the task list.
//!
//! Usage:
//!   BROWSER_USE_API_KEY="bu_..." RUST_LOG=browser_use_sdk=debug cargo run --example advanced_usage

use std::time::Duration;

use browser_use_sdk::prelude::*;
use browser_use_sdk::{is_not_found, is_rate_limit_error};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, JsonSchema)]
struct HackerNewsPost {
    title: String,
    url: String,
    score: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct TopPosts {
    posts: Vec<HackerNewsPost>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BrowserUseClient::builder()
        .timeout(Duration::from_secs(20))
        .build()?;
    let tasks = client.tasks();

    let request = CreateTaskRequest::new("Find the top 5 posts on Hacker News with their scores")
        .llm(LlmModel::CLAUDE_SONNET_4_5)
        .start_url("https://news.ycombinator.com")
        .max_steps(25)
        .allowed_domains(["news.ycombinator.com"])
        .metadata("example", "advanced_usage")
        .structured_output_for::<TopPosts>()?;

    let task = match tasks.create_task(&request).await {
        Ok(task) => task,
        Err(err) if is_rate_limit_error(&err) => {
            eprintln!("Too many active sessions, try again later: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("Created task {}", task.id());

    // Ctrl-C stops waiting; the task itself is stopped explicitly.
    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let options = CompleteOptions::new()
        .poll_interval(Duration::from_secs(3))
        .timeout(Duration::from_secs(180))
        .cancel_token(cancel);

    match task.complete(options).await {
        Ok(view) => {
            println!("Finished with status {} after {} steps", view.status, view.steps.len());
            if let Some(top) = view.parsed_output::<TopPosts>()? {
                for post in top.posts {
                    println!("{:>5}  {}  ({})", post.score, post.title, post.url);
                }
            }
        }
        Err(err) if err.is_cancelled() || err.is_timeout() => {
            eprintln!("Stopped waiting: {err}");
            let view = task.stop().await?;
            println!("Task is now {}", view.status);
        }
        Err(err) => return Err(err.into()),
    }

    if let Err(err) = tasks.get_task("does-not-exist").await {
        if is_not_found(&err) {
            println!("Unknown task ids are reported as not found");
        }
    }

    let mut options = ListTasksOptions::new()
        .page_size(10)
        .filter_by(TaskStatus::Finished);
    for _ in 0..3 {
        let page = tasks.list_tasks(Some(&options)).await?;
        println!(
            "Page {}/{}: {} tasks",
            page.page_number,
            page.total_pages(),
            page.items.len()
        );
        for item in &page.items {
            println!("  {}  {}  {}", item.id, item.status, item.task);
        }
        match page.next_page_options(&options) {
            Some(next) => options = next,
            None => break,
        }
    }

    Ok(())
}

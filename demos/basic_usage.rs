//! Basic usage example
//!
//! Creates a task, waits for it to finish and prints the output.
//!
//! The API key is read from the environment:
//! - BROWSER_USE_API_KEY
//!
//! Usage:
//!   BROWSER_USE_API_KEY="bu_..." cargo run --example basic_usage

use browser_use_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = BrowserUseClient::from_env()?;

    let task = client
        .tasks()
        .create_task(&CreateTaskRequest::new(
            "Search for the top Hacker News post and return the title and url.",
        ))
        .await?;
    println!("Created task {} in session {}", task.id(), task.session_id());

    let result = task.complete(CompleteOptions::default()).await?;

    println!("Status: {}", result.status);
    match result.output {
        Some(output) => println!("Output:\n{output}"),
        None => println!("No output"),
    }

    Ok(())
}

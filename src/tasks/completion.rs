//! Waiting for a task to reach a terminal status.
//!
//! The poller fetches once immediately, then once per poll interval, until the
//! task is finished or stopped. It gives up when the overall timeout elapses or
//! when the caller's cancellation token fires. A failed fetch ends the wait at
//! once with that error; nothing is retried.

use super::types::TaskView;
use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_COMPLETE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Knobs for [`Task::complete`](super::Task::complete).
///
/// Unset and zero durations both mean "use the default" (2s interval,
/// 5min timeout). There is no way to ask for an unbounded wait.
#[derive(Debug, Clone, Default)]
pub struct CompleteOptions {
    pub poll_interval: Option<Duration>,
    pub timeout: Option<Duration>,
    /// Aborts the wait with [`Error::Cancelled`] when triggered.
    pub cancel: Option<CancellationToken>,
}

impl CompleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn effective_poll_interval(&self) -> Duration {
        self.poll_interval
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_POLL_INTERVAL)
    }

    pub fn effective_timeout(&self) -> Duration {
        self.timeout
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_COMPLETE_TIMEOUT)
    }
}

/// Poll `fetch` until it reports a terminal status.
///
/// The deadline starts now. Fetches never overlap.
pub(crate) async fn poll_until_terminal<F, Fut>(
    task_id: &str,
    options: &CompleteOptions,
    mut fetch: F,
) -> Result<TaskView>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<TaskView>>,
{
    let interval = options.effective_poll_interval();
    let timeout = options.effective_timeout();
    let started = Instant::now();

    let polling = async {
        let mut ticker = tokio::time::interval_at(started + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut attempt: u32 = 1;
        loop {
            let view = fetch().await?;
            debug!(
                task_id,
                attempt,
                status = view.status.as_str(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "polled browser-use task"
            );
            if view.is_terminal() {
                return Ok::<_, Error>(view);
            }
            ticker.tick().await;
            attempt = attempt.saturating_add(1);
        }
    };

    let cancelled = async {
        match &options.cancel {
            Some(token) => token.cancelled().await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancelled => Err(Error::Cancelled {
            task_id: task_id.to_string(),
        }),
        outcome = tokio::time::timeout(timeout, polling) => match outcome {
            Ok(result) => result,
            Err(elapsed) => Err(Error::Timeout {
                timeout,
                source: elapsed,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::tasks::types::TaskStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(10),
            "expected ~{expected:?}, got {elapsed:?}"
        );
    }

    fn view(status: TaskStatus) -> TaskView {
        serde_json::from_value(serde_json::json!({
            "id": "task-1",
            "sessionId": "session-1",
            "status": status,
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    /// Returns a fetcher that walks through `statuses`, repeating the last one.
    fn scripted(
        statuses: Vec<TaskStatus>,
        calls: Arc<AtomicUsize>,
    ) -> impl FnMut() -> std::future::Ready<Result<TaskView>> {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            let status = statuses[n.min(statuses.len() - 1)];
            std::future::ready(Ok(view(status)))
        }
    }

    #[test]
    fn zero_durations_mean_default() {
        let zero = CompleteOptions::new()
            .poll_interval(Duration::ZERO)
            .timeout(Duration::ZERO);
        let unset = CompleteOptions::new();
        assert_eq!(zero.effective_poll_interval(), DEFAULT_POLL_INTERVAL);
        assert_eq!(zero.effective_timeout(), DEFAULT_COMPLETE_TIMEOUT);
        assert_eq!(zero.effective_poll_interval(), unset.effective_poll_interval());
        assert_eq!(zero.effective_timeout(), unset.effective_timeout());
        assert_eq!(DEFAULT_POLL_INTERVAL, Duration::from_secs(2));
        assert_eq!(DEFAULT_COMPLETE_TIMEOUT, Duration::from_secs(300));
    }

    #[tokio::test(start_paused = true)]
    async fn already_terminal_returns_without_waiting() {
        let calls = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();
        let result = poll_until_terminal(
            "task-1",
            &CompleteOptions::new(),
            scripted(vec![TaskStatus::Finished], calls.clone()),
        )
        .await
        .unwrap();

        assert_eq!(result.status, TaskStatus::Finished);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_elapsed(start, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn polls_each_interval_until_terminal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();
        let result = poll_until_terminal(
            "task-1",
            &CompleteOptions::new().poll_interval(Duration::from_secs(3)),
            scripted(
                vec![
                    TaskStatus::Created,
                    TaskStatus::Started,
                    TaskStatus::Started,
                    TaskStatus::Stopped,
                ],
                calls.clone(),
            ),
        )
        .await
        .unwrap();

        assert_eq!(result.status, TaskStatus::Stopped);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_elapsed(start, Duration::from_secs(9));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_never_terminal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();
        let err = poll_until_terminal(
            "task-1",
            &CompleteOptions::new()
                .poll_interval(Duration::from_secs(1))
                .timeout(Duration::from_secs(10)),
            scripted(vec![TaskStatus::Started], calls.clone()),
        )
        .await
        .unwrap_err();

        assert!(err.is_timeout(), "{err:?}");
        assert!(std::error::Error::source(&err).is_some());
        assert_elapsed(start, Duration::from_secs(10));
        // First fetch at t=0 plus one per elapsed interval before the deadline.
        assert!(calls.load(Ordering::SeqCst) >= 10);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timeout_uses_default_deadline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();
        let err = poll_until_terminal(
            "task-1",
            &CompleteOptions::new()
                .poll_interval(Duration::ZERO)
                .timeout(Duration::ZERO),
            scripted(vec![TaskStatus::Started], calls.clone()),
        )
        .await
        .unwrap_err();

        assert!(err.is_timeout());
        assert_elapsed(start, DEFAULT_COMPLETE_TIMEOUT);
        // One fetch at t=0, then one every 2s.
        assert!(calls.load(Ordering::SeqCst) >= 150);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_error_aborts_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let err = poll_until_terminal("task-1", &CompleteOptions::new(), move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(if n == 0 {
                Ok(view(TaskStatus::Started))
            } else {
                Err(Error::Api(ApiError::from_response(500, "")))
            })
        })
        .await
        .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_the_wait() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            trigger.cancel();
        });

        let start = Instant::now();
        let err = poll_until_terminal(
            "task-1",
            &CompleteOptions::new().cancel_token(token),
            scripted(vec![TaskStatus::Started], calls.clone()),
        )
        .await
        .unwrap_err();

        assert!(err.is_cancelled(), "{err:?}");
        assert_elapsed(start, Duration::from_secs(5));
        assert!(calls.load(Ordering::SeqCst) < 5);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_token_skips_fetching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancellationToken::new();
        token.cancel();

        let err = poll_until_terminal(
            "task-1",
            &CompleteOptions::new().cancel_token(token),
            scripted(vec![TaskStatus::Finished], calls.clone()),
        )
        .await
        .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

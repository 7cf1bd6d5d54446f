// src/services/timer.rs

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use tokio::task::AbortHandle;
use tokio::time::{Instant, interval_at};
use uuid::Uuid;

use crate::store::{SharedStore, TickOutcome};

/// Owns a running quiz countdown task.
///
/// Dropping the handle aborts the task, so the countdown cannot outlive the
/// attempt that holds it.
pub struct TimerHandle {
    abort: Option<AbortHandle>,
}

impl TimerHandle {
    /// Stops the countdown now.
    pub fn cancel(mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }

    /// Releases the task without aborting it. Used by the countdown itself
    /// when it auto-submits, since it is about to exit anyway.
    pub fn disarm(mut self) {
        self.abort.take();
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.abort.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.abort.is_some())
            .finish()
    }
}

/// Spawns the countdown for `attempt_id`, ticking once per `period`.
///
/// Each tick takes the store's write lock and runs to completion, so a tick
/// never interleaves with a manual submission.
pub fn spawn_countdown(store: SharedStore, attempt_id: Uuid, period: Duration) -> TimerHandle {
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            let outcome = store.write().await.tick_attempt(attempt_id, Utc::now());
            match outcome {
                TickOutcome::Running(remaining) => {
                    tracing::trace!(%attempt_id, remaining, "Quiz countdown tick");
                }
                TickOutcome::Expired(result) => {
                    tracing::info!(
                        %attempt_id,
                        quiz_id = %result.quiz_id,
                        score = result.score,
                        "Quiz time expired, attempt auto-submitted"
                    );
                    break;
                }
                TickOutcome::Stopped => break,
            }
        }
    });

    TimerHandle {
        abort: Some(task.abort_handle()),
    }
}

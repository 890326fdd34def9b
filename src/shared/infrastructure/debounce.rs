// Single-slot cancellable timer.
//
// Purpose
// - Collapse a burst of triggers into one run of a task, after a quiet window.
//
// Responsibilities
// - Hold at most one pending task. Scheduling again aborts the pending one and starts a new window.
// - Abort the pending task when cancelled or dropped, so nothing runs after its owner is gone.
//
// Boundaries
// - Needs a tokio runtime. Work spawned by the task itself is not cancelled.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            task.await;
        }));
    }

    /// Returns true when a task was still waiting or running.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

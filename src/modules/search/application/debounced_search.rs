//! Debounced scheduling of ranking passes
//!
//! Every query edit cancels whatever ranking pass is still waiting and
//! schedules a new one; a pass only runs once edits have been quiet for the
//! configured interval.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct QueryDebouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` after the quiescence interval, superseding any pending task
    ///
    /// The returned handle resolves to `true` when the task ran and `false`
    /// when a later call cancelled it first. Must be called within a tokio runtime.
    pub fn schedule<F, Fut>(&self, task: F) -> JoinHandle<bool>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();

        {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
                debug!("Superseded pending ranking pass");
            }
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => false,
                _ = tokio::time::sleep(delay) => {
                    task().await;
                    true
                }
            }
        })
    }

    /// Cancel the pending task, if any
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(token) = pending.take() {
            token.cancel();
        }
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

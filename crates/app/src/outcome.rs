//! One-shot delayed outcome delivery.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A scheduled flow outcome, delivered after the simulated backend latency.
///
/// The task is tied to the owning form's lifetime: dropping the guard aborts
/// a still-pending delivery, so a torn-down view never receives a stale
/// update.
#[derive(Debug)]
pub struct OutcomeTask {
    handle: JoinHandle<()>,
}

impl OutcomeTask {
    /// Run `deliver` after `delay`.
    pub fn schedule<F>(delay: Duration, deliver: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            deliver.await;
        });
        Self { handle }
    }

    /// Whether the delivery already ran (or was aborted).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel a pending delivery.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for OutcomeTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

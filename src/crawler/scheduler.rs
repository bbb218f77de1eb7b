//! Concurrency gate for page-scrape tasks
//!
//! Every page task is spawned at once. When a limit is configured, each task
//! first takes a permit from a shared semaphore and holds it until it
//! finishes, which turns the fan-out into a fixed-size worker pool. Without a
//! limit, acquiring is a no-op.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Hands out page-task permits
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    /// Shared permit pool; `None` means unbounded
    permits: Option<Arc<Semaphore>>,

    limit: Option<usize>,
}

impl Scheduler {
    /// Creates a scheduler allowing at most `limit` concurrent page tasks
    ///
    /// `None` (or `Some(0)`, which would deadlock) means unbounded.
    pub fn new(limit: Option<usize>) -> Self {
        match limit.filter(|n| *n > 0) {
            Some(n) => Self {
                permits: Some(Arc::new(Semaphore::new(n))),
                limit: Some(n),
            },
            None => Self::unbounded(),
        }
    }

    /// Creates a scheduler that never blocks
    pub fn unbounded() -> Self {
        Self {
            permits: None,
            limit: None,
        }
    }

    /// The configured limit, if any
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Waits for a slot
    ///
    /// # Returns
    ///
    /// * `Some(permit)` - Hold it for the task's lifetime
    /// * `None` - Unbounded scheduler, nothing to hold
    pub async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        let semaphore = self.permits.as_ref()?;
        Arc::clone(semaphore).acquire_owned().await.ok()
    }
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// Single slot timer. Scheduling a new job cancels the pending one before
/// arming again, so only the job from the last quiet period runs.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        return Debouncer {
            delay,
            pending: None,
        };
    }

    pub fn schedule<F>(&mut self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            job.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        if let Some(pending) = &self.pending {
            return !pending.is_finished();
        }

        return false;
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

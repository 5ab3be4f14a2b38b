//! Cancellable delayed tasks for keystroke debouncing

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A callback waiting for its delay to elapse
#[derive(Debug)]
struct ScheduledTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Holds at most one pending callback
///
/// Scheduling always cancels whatever was pending first, so only the most
/// recently scheduled callback can ever fire. Must be used from within a
/// tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `callback` once the delay elapses, unless cancelled first
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let child = token.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {}
                _ = tokio::time::sleep(delay) => callback(),
            }
        });

        self.pending = Some(ScheduledTask { token, handle });
    }

    /// Cancel the pending callback. Safe to call any number of times.
    ///
    /// Returns true if a callback that had not fired yet was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) => {
                let was_waiting = !task.handle.is_finished();
                task.token.cancel();
                was_waiting
            }
            None => false,
        }
    }

    /// Whether a callback is still waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.token.is_cancelled() && !task.handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter_callback(counter: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(counter_callback(&fired));
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(counter_callback(&fired));
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(counter_callback(&fired));

        // 400ms after the first schedule, 200ms after the second.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        assert!(!debouncer.cancel());
        debouncer.schedule(counter_callback(&fired));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}

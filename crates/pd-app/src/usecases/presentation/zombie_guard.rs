use std::future::Future;
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// One-shot delayed callback that can be cancelled deterministically.
///
/// Dropping the guard cancels a pending callback, so nothing scheduled here
/// can outlive the dialog state that owns it.
#[derive(Debug, Default)]
pub struct ZombieGuard {
    pending: Option<AbortHandle>,
}

impl ZombieGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `on_fire` to run once after `delay`. Re-arming replaces any
    /// callback that has not fired yet.
    pub fn arm<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.disarm();
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            on_fire.await;
        });
        self.pending = Some(handle.abort_handle());
        debug!(
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "zombie guard armed"
        );
    }

    /// Cancel the pending callback. Returns whether one was still waiting.
    pub fn disarm(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("zombie guard disarmed");
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ZombieGuard {
    fn drop(&mut self) {
        self.disarm();
    }
}

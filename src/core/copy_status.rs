//! Cancellable revert timer for the "Copied!" indicator.
//!
//! At most one timer task is live. `restart` aborts the previous task before
//! spawning the next, so repeated copies extend the window instead of
//! stacking timers. Each task carries the copy generation it was armed for;
//! `update()` drops expiries whose generation is no longer current.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::core::action::Action;

/// How long the copy indicator stays on after a successful copy.
pub const COPY_STATUS_DURATION: Duration = Duration::from_millis(2000);

#[derive(Default)]
pub struct CopyStatusTimer {
    handle: Option<AbortHandle>,
}

impl CopyStatusTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort any pending revert and schedule a new one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn restart(&mut self, generation: u64, tx: mpsc::Sender<Action>) {
        self.cancel();
        debug!("Arming copy status timer (generation {})", generation);
        let deadline = Instant::now() + COPY_STATUS_DURATION;
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if tx.send(Action::CopyStatusExpired(generation)).is_err() {
                warn!("Failed to send copy status expiry: receiver dropped");
            }
        });
        self.handle = Some(task.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CopyStatusTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! # Merger Form
//!
//! Owns the `App` state together with the adapters its effects need, and
//! carries out whatever `update()` asks for:
//!
//! ```text
//! dispatch(Action) ──► update() ──► Effect ──┬─► Persistence (sync, best effort)
//!                                            ├─► Clipboard task ──┐
//!                                            └─► CopyStatusTimer ─┤
//!                                                                 ▼
//!                              pump() ◄── mpsc::Receiver<Action> ─┘
//! ```
//!
//! Everything runs on the caller's thread except the clipboard write and the
//! revert timer. Both report back as actions through the channel, and
//! `pump()` feeds them into `update()` one at a time.

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::core::action::{Action, Effect, update};
use crate::core::copy_status::CopyStatusTimer;
use crate::core::persistence::Persistence;
use crate::core::state::{App, BufferId};

pub struct MergerForm {
    pub app: App,
    persistence: Persistence,
    clipboard: Arc<dyn Clipboard>,
    timer: CopyStatusTimer,
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
}

impl MergerForm {
    /// Build the form, loading both sources from storage.
    pub fn open(persistence: Persistence, clipboard: Arc<dyn Clipboard>) -> Self {
        let (source1, source2) = persistence.load_all();
        info!(
            "Opened form (source1: {} bytes, source2: {} bytes, clipboard: {})",
            source1.len(),
            source2.len(),
            clipboard.name()
        );
        let (tx, rx) = mpsc::channel();
        Self {
            app: App::new(source1, source2),
            persistence,
            clipboard,
            timer: CopyStatusTimer::new(),
            tx,
            rx,
        }
    }

    /// Apply an action and run its effect. Returns `true` when the form should close.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let effect = update(&mut self.app, action);
        self.run_effect(effect)
    }

    /// Convenience for `dispatch(Action::Edit(..))`.
    pub fn edit(&mut self, id: BufferId, text: impl Into<String>) {
        self.dispatch(Action::Edit(id, text.into()));
    }

    /// Apply every action reported by background tasks since the last call.
    /// Returns `true` if anything was applied.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        while let Ok(action) = self.rx.try_recv() {
            debug!("Form received: {:?}", action);
            applied = true;
            self.dispatch(action);
        }
        applied
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Persist(id) => self.persistence.save(id, self.app.buffer(id)),
            Effect::CopyToClipboard(text, epoch) => self.spawn_copy(text, epoch),
            Effect::ScheduleStatusReset(generation) => {
                self.timer.restart(generation, self.tx.clone());
            }
            Effect::ClearStorage => {
                self.timer.cancel();
                self.persistence.clear();
            }
            Effect::Quit => return true,
        }
        false
    }

    fn spawn_copy(&self, text: String, epoch: u64) {
        info!("Spawning clipboard write ({} bytes)", text.len());
        let clipboard = self.clipboard.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = match clipboard.copy(&text).await {
                Ok(()) => Action::CopySucceeded(epoch),
                Err(e) => Action::CopyFailed(epoch, e.to_string()),
            };
            if tx.send(action).is_err() {
                warn!("Failed to report clipboard result: receiver dropped");
            }
        });
    }
}

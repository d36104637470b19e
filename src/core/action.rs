//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! User types into Source 1? That's `Action::Edit(BufferId::Source1, text)`.
//! Clipboard write finished? That's `Action::CopySucceeded`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter should carry out. No side effects here. Storage,
//! clipboard and timers are driven by whoever runs the loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, BufferId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A buffer's full new contents after an edit.
    Edit(BufferId, String),
    /// Copy button pressed.
    Copy,
    /// The clipboard accepted text requested in the given clear epoch.
    CopySucceeded(u64),
    /// The clipboard rejected text requested in the given clear epoch.
    CopyFailed(u64, String),
    /// The revert timer for the given copy generation fired.
    CopyStatusExpired(u64),
    /// "Clear Data" pressed.
    ClearData,
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Write this buffer to storage.
    Persist(BufferId),
    /// Write this text to the clipboard, tagged with the current clear epoch.
    CopyToClipboard(String, u64),
    /// (Re)start the status timer for this generation.
    ScheduleStatusReset(u64),
    /// Delete both persisted entries.
    ClearStorage,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Edit(id, text) => {
            let buffer = app.buffer_mut(id);
            if *buffer == text {
                return Effect::None;
            }
            *buffer = text;
            Effect::Persist(id)
        }
        Action::Copy => {
            let merged = app.merged();
            if merged.is_empty() {
                debug!("Copy ignored: nothing to copy");
                return Effect::None;
            }
            Effect::CopyToClipboard(merged, app.clear_epoch)
        }
        Action::CopySucceeded(epoch) => {
            if epoch != app.clear_epoch {
                debug!("Dropping clipboard success from before Clear Data");
                return Effect::None;
            }
            app.copy_status = true;
            app.copy_generation += 1;
            app.status_message = String::from("Copied to clipboard");
            Effect::ScheduleStatusReset(app.copy_generation)
        }
        Action::CopyFailed(epoch, reason) => {
            warn!("Copy to clipboard failed: {}", reason);
            if epoch != app.clear_epoch {
                return Effect::None;
            }
            // The note expires on the same timer as "Copied!"
            app.copy_generation += 1;
            app.status_message = String::from("Copy failed");
            Effect::ScheduleStatusReset(app.copy_generation)
        }
        Action::CopyStatusExpired(generation) => {
            if generation == app.copy_generation {
                app.copy_status = false;
                app.status_message.clear();
            } else {
                debug!(
                    "Ignoring stale copy status expiry (generation {}, current {})",
                    generation, app.copy_generation
                );
            }
            Effect::None
        }
        Action::ClearData => {
            info!("Clearing both sources");
            app.source1.clear();
            app.source2.clear();
            app.clear_epoch += 1;
            app.copy_status = false;
            app.status_message.clear();
            Effect::ClearStorage
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(source1: &str, source2: &str) -> App {
        App::new(source1.to_string(), source2.to_string())
    }

    #[test]
    fn test_edit_replaces_buffer_and_persists() {
        let mut app = app_with("", "");
        let effect = update(&mut app, Action::Edit(BufferId::Source1, "hello".to_string()));
        assert_eq!(effect, Effect::Persist(BufferId::Source1));
        assert_eq!(app.source1, "hello");
        assert_eq!(app.merged(), "hello - ");
    }

    #[test]
    fn test_edit_with_same_text_is_noop() {
        let mut app = app_with("same", "");
        let effect = update(&mut app, Action::Edit(BufferId::Source1, "same".to_string()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_copy_empty_result_is_noop() {
        let mut app = app_with("", "");
        assert_eq!(update(&mut app, Action::Copy), Effect::None);
        assert!(!app.copy_status);
    }

    #[test]
    fn test_copy_requests_clipboard_write_of_merged_text() {
        let mut app = app_with("a\nb", "x");
        let effect = update(&mut app, Action::Copy);
        assert_eq!(effect, Effect::CopyToClipboard("a - x\nb - ".to_string(), 0));
        // Status only flips once the write succeeds
        assert!(!app.copy_status);
    }

    #[test]
    fn test_copy_succeeded_sets_status_and_schedules_reset() {
        let mut app = app_with("a", "");
        let effect = update(&mut app, Action::CopySucceeded(0));
        assert!(app.copy_status);
        assert_eq!(effect, Effect::ScheduleStatusReset(1));
    }

    #[test]
    fn test_copy_failed_leaves_status_unset() {
        let mut app = app_with("a", "");
        let effect = update(&mut app, Action::CopyFailed(0, "denied".to_string()));
        assert_eq!(effect, Effect::ScheduleStatusReset(1));
        assert!(!app.copy_status);
        assert_eq!(app.status_message, "Copy failed");
    }

    #[test]
    fn test_copy_failed_note_expires() {
        let mut app = app_with("a", "");
        update(&mut app, Action::CopyFailed(0, "denied".to_string()));
        update(&mut app, Action::CopyStatusExpired(1));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_copy_result_from_before_clear_is_dropped() {
        let mut app = app_with("a", "b");
        let Effect::CopyToClipboard(_, epoch) = update(&mut app, Action::Copy) else {
            panic!("Expected a clipboard write");
        };
        update(&mut app, Action::ClearData);

        assert_eq!(update(&mut app, Action::CopySucceeded(epoch)), Effect::None);
        assert!(!app.copy_status);
        assert!(app.status_message.is_empty());

        assert_eq!(
            update(&mut app, Action::CopyFailed(epoch, "late".to_string())),
            Effect::None
        );
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_copy_after_clear_uses_new_epoch() {
        let mut app = app_with("a", "");
        update(&mut app, Action::ClearData);
        update(&mut app, Action::Edit(BufferId::Source1, "b".to_string()));

        let effect = update(&mut app, Action::Copy);
        assert_eq!(effect, Effect::CopyToClipboard("b - ".to_string(), 1));
        update(&mut app, Action::CopySucceeded(1));
        assert!(app.copy_status);
    }

    #[test]
    fn test_expiry_for_current_generation_clears_status() {
        let mut app = app_with("a", "");
        update(&mut app, Action::CopySucceeded(0));
        update(&mut app, Action::CopyStatusExpired(1));
        assert!(!app.copy_status);
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut app = app_with("a", "");
        update(&mut app, Action::CopySucceeded(0));
        let effect = update(&mut app, Action::CopySucceeded(0));
        assert_eq!(effect, Effect::ScheduleStatusReset(2));

        // Expiry from the first copy must not cut the second one short
        update(&mut app, Action::CopyStatusExpired(1));
        assert!(app.copy_status);

        update(&mut app, Action::CopyStatusExpired(2));
        assert!(!app.copy_status);
    }

    #[test]
    fn test_clear_data_empties_buffers() {
        let mut app = app_with("a", "b");
        update(&mut app, Action::CopySucceeded(0));

        let effect = update(&mut app, Action::ClearData);

        assert_eq!(effect, Effect::ClearStorage);
        assert!(app.source1.is_empty());
        assert!(app.source2.is_empty());
        assert!(!app.copy_status);
        assert_eq!(app.merged(), "");
    }

    #[test]
    fn test_quit() {
        let mut app = app_with("", "");
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

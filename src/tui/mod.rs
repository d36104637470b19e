//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event or after a
//! background action (clipboard result, copy status expiry) was applied.
//! Polling wakes every 100ms so those background actions show up promptly.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::Action;
use crate::core::form::MergerForm;
use crate::core::state::{App, BufferId};
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonBar, ButtonEvent, EditorEvent, MergedView, SourceEditor};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::FormLayout;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub source1: SourceEditor,
    pub source2: SourceEditor,
    /// Which editor receives keystrokes
    pub focus: BufferId,
    pub button_bar: ButtonBar,
    /// Keeps its scroll position across frames
    pub merged_view: MergedView,
    /// Regions from the last draw, for mouse hit-testing
    pub layout: FormLayout,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            source1: SourceEditor::new(BufferId::Source1, &app.source1),
            source2: SourceEditor::new(BufferId::Source2, &app.source2),
            focus: BufferId::Source1, // User expects to type immediately
            button_bar: ButtonBar::new(),
            merged_view: MergedView::new(app.merged()),
            layout: FormLayout::default(),
        }
    }

    pub fn editor_mut(&mut self, id: BufferId) -> &mut SourceEditor {
        match id {
            BufferId::Source1 => &mut self.source1,
            BufferId::Source2 => &mut self.source2,
        }
    }

    /// Pull buffer contents the form changed on its own (Clear Data).
    pub fn sync_editors(&mut self, app: &App) {
        for id in BufferId::ALL {
            self.editor_mut(id).sync(app.buffer(id));
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset on redraw
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the form until the user quits.
///
/// Must be called from within a tokio runtime (clipboard writes and the
/// copy status timer are spawned tasks).
pub fn run(mut form: MergerForm) -> std::io::Result<()> {
    let mut tui = TuiState::new(&form.app);

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_terminal_mode_guard) => event_loop(&mut terminal, &mut form, &mut tui),
        Err(e) => Err(e),
    };

    ratatui::restore();
    info!("Text merger exiting");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    form: &mut MergerForm,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &form.app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_INTERVAL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(form, tui, event) {
                return Ok(());
            }
        }

        // Clipboard results and status expiries
        if form.pump() {
            needs_redraw = true;
        }
    }
}

/// Route one event. Returns `true` when the app should quit.
fn handle_event(form: &mut MergerForm, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::Quit => form.dispatch(Action::Quit),
        TuiEvent::Copy => form.dispatch(Action::Copy),
        TuiEvent::ClearData => {
            let quit = form.dispatch(Action::ClearData);
            tui.sync_editors(&form.app);
            quit
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.merged_view.handle_event(&event);
            false
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = tui.focus.other();
            false
        }
        TuiEvent::MouseClick(column, row) => {
            if let Some(button) = tui.button_bar.hit_test(column, row) {
                debug!("Button clicked: {:?}", button);
                let event = match button {
                    ButtonEvent::Copy => TuiEvent::Copy,
                    ButtonEvent::ClearData => TuiEvent::ClearData,
                };
                return handle_event(form, tui, event);
            }
            if let Some(id) = ui::hit_test_source(&tui.layout, column, row) {
                tui.focus = id;
            }
            false
        }
        // Everything else is editing in the focused source
        event => {
            let focus = tui.focus;
            if let Some(EditorEvent::Changed(text)) = tui.editor_mut(focus).handle_event(&event) {
                form.dispatch(Action::Edit(focus, text));
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::Persistence;
    use crate::test_support::{RecordingClipboard, SharedStore};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn setup(store: SharedStore) -> (MergerForm, TuiState) {
        let form = MergerForm::open(
            Persistence::new(Box::new(store)),
            Arc::new(RecordingClipboard::default()),
        );
        let tui = TuiState::new(&form.app);
        (form, tui)
    }

    fn type_text(form: &mut MergerForm, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(form, tui, TuiEvent::InputChar(c));
        }
    }

    /// Draw once so the layout and button rectangles are cached.
    fn draw(form: &MergerForm, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &form.app, tui)).unwrap();
    }

    #[test]
    fn test_typing_edits_focused_source_and_persists() {
        let store = SharedStore::default();
        let (mut form, mut tui) = setup(store.clone());

        type_text(&mut form, &mut tui, "a\nb");
        handle_event(&mut form, &mut tui, TuiEvent::FocusNext);
        type_text(&mut form, &mut tui, "x");

        assert_eq!(form.app.merged(), "a - x\nb - ");
        assert_eq!(store.get("textMerger-text1").as_deref(), Some("a\nb"));
        assert_eq!(store.get("textMerger-text2").as_deref(), Some("x"));
    }

    #[test]
    fn test_focus_toggles_between_sources() {
        let (mut form, mut tui) = setup(SharedStore::default());
        assert_eq!(tui.focus, BufferId::Source1);
        handle_event(&mut form, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, BufferId::Source2);
        handle_event(&mut form, &mut tui, TuiEvent::FocusPrev);
        assert_eq!(tui.focus, BufferId::Source1);
    }

    #[test]
    fn test_clear_data_resets_editors() {
        let store = SharedStore::default();
        let (mut form, mut tui) = setup(store.clone());
        type_text(&mut form, &mut tui, "hello");

        handle_event(&mut form, &mut tui, TuiEvent::ClearData);

        assert!(tui.source1.buffer.is_empty());
        assert_eq!(tui.source1.cursor_pos(), 0);
        assert_eq!(form.app.merged(), "");
        assert_eq!(store.get("textMerger-text1"), None);

        // Typing after a reset starts from scratch
        type_text(&mut form, &mut tui, "z");
        assert_eq!(form.app.source1, "z");
    }

    #[test]
    fn test_click_focuses_source() {
        let (mut form, mut tui) = setup(SharedStore::default());
        draw(&form, &mut tui);

        let area = tui.layout.source2;
        handle_event(&mut form, &mut tui, TuiEvent::MouseClick(area.x + 2, area.y + 1));
        assert_eq!(tui.focus, BufferId::Source2);
    }

    #[test]
    fn test_click_clear_button() {
        let (mut form, mut tui) = setup(SharedStore::default());
        type_text(&mut form, &mut tui, "data");
        draw(&form, &mut tui);

        // Clear Data sits right after the Copy button and a one-cell gap
        let buttons = tui.layout.buttons;
        handle_event(&mut form, &mut tui, TuiEvent::MouseClick(buttons.x + 9, buttons.y));

        assert!(form.app.source1.is_empty());
        assert!(tui.source1.buffer.is_empty());
    }

    #[test]
    fn test_copy_with_empty_result_does_nothing() {
        let (mut form, mut tui) = setup(SharedStore::default());
        assert!(!handle_event(&mut form, &mut tui, TuiEvent::Copy));
        assert!(!form.app.copy_status);
    }

    #[tokio::test]
    async fn test_copy_reports_back_through_pump() {
        let (mut form, mut tui) = setup(SharedStore::default());
        type_text(&mut form, &mut tui, "a");

        handle_event(&mut form, &mut tui, TuiEvent::Copy);
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        form.pump();

        assert!(form.app.copy_status);
    }

    #[test]
    fn test_scroll_moves_result_not_editor() {
        let (mut form, mut tui) = setup(SharedStore::default());
        let long: String = (0..30).map(|i| format!("{i}\n")).collect();
        handle_event(&mut form, &mut tui, TuiEvent::Paste(long));
        draw(&form, &mut tui);
        let cursor = tui.source1.cursor_pos();

        handle_event(&mut form, &mut tui, TuiEvent::ScrollPageDown);
        draw(&form, &mut tui);

        assert!(tui.merged_view.scroll_offset() > 0);
        assert_eq!(tui.source1.cursor_pos(), cursor);
    }

    #[test]
    fn test_quit() {
        let (mut form, mut tui) = setup(SharedStore::default());
        assert!(handle_event(&mut form, &mut tui, TuiEvent::Quit));
    }

    #[test]
    fn test_resize_is_not_an_edit() {
        let store = SharedStore::default();
        let (mut form, mut tui) = setup(store.clone());
        assert!(!handle_event(&mut form, &mut tui, TuiEvent::Resize));
        assert_eq!(store.get("textMerger-text1"), None);
    }
}

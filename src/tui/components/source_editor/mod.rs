//! # SourceEditor Component
//!
//! Multi-line text area for one of the two sources.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, Enter for newlines, bracketed paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Show a placeholder while empty
//! - Scroll internally so the cursor stays visible
//!
//! ## State Management
//!
//! The editor keeps its own copy of the text so it can move a cursor around
//! in it, but the form's `App` stays the source of truth: every change is
//! reported as `EditorEvent::Changed` and the parent dispatches it as an
//! `Action::Edit`. When the form changes the text behind the editor's back
//! (Clear Data), the parent calls `sync`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::BufferId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{inner_height, inner_width, next_char_boundary, prev_char_boundary, wrapped_lines};

/// High-level events emitted by the SourceEditor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Text changed; carries the full new contents.
    Changed(String),
    /// Only the cursor moved.
    CursorMoved,
}

/// Editable text area bound to one `BufferId`.
///
/// # Props
///
/// - `focused`: Whether keyboard input goes here (from TUI state)
///
/// # State
///
/// - `buffer`: Local copy of the source text
/// - `cursor`: Cursor position and scroll offset (see `CursorState`)
pub struct SourceEditor {
    pub id: BufferId,
    pub buffer: String,
    pub focused: bool,
    cursor: CursorState,
}

impl SourceEditor {
    /// Create an editor holding `text`, with the cursor at the end.
    pub fn new(id: BufferId, text: &str) -> Self {
        let mut editor = Self {
            id,
            buffer: String::new(),
            focused: false,
            cursor: CursorState::new(),
        };
        editor.sync(text);
        editor
    }

    /// Replace the local copy if it differs from `text`.
    pub fn sync(&mut self, text: &str) {
        if self.buffer == text {
            return;
        }
        self.buffer = text.to_string();
        self.cursor.reset();
        self.cursor.pos = self.buffer.len();
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    fn changed(&self) -> Option<EditorEvent> {
        Some(EditorEvent::Changed(self.buffer.clone()))
    }

    fn moved(&mut self, pos: usize) -> Option<EditorEvent> {
        if pos == self.cursor.pos {
            return None;
        }
        self.cursor.pos = pos;
        Some(EditorEvent::CursorMoved)
    }
}

impl Component for SourceEditor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible_rows = inner_height(area.height);
        self.cursor
            .update_scroll_offset(&self.buffer, area.width, visible_rows);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.id.label());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.id.placeholder()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let rows = wrapped_lines(&self.buffer, inner_width(area.width));
            let start = (self.cursor.scroll_offset as usize).min(rows.len());
            let end = (start + visible_rows as usize).min(rows.len());
            Paragraph::new(rows[start..end].join("\n"))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for SourceEditor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                if text.is_empty() {
                    return None;
                }
                // Terminals deliver pasted line breaks as CR or CRLF
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                let pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.moved(pos)
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let pos = next_char_boundary(&self.buffer, self.cursor.pos);
                self.moved(pos)
            }
            TuiEvent::CursorHome => {
                let pos = self.cursor.line_start(&self.buffer);
                self.moved(pos)
            }
            TuiEvent::CursorEnd => {
                let pos = self.cursor.line_end(&self.buffer);
                self.moved(pos)
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(EditorEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(EditorEvent::CursorMoved),
            _ => None,
        }
    }
}

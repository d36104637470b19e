//! # ButtonBar Component
//!
//! The "Copy" and "Clear Data" buttons plus a key hint.
//!
//! The bar remembers where it drew each button on the last frame so mouse
//! clicks can be hit-tested against the same rectangles the user saw.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

const COPY_LABEL: &str = " Copy ";
const COPIED_LABEL: &str = " Copied! ";
const CLEAR_LABEL: &str = " Clear Data ";
const KEY_HINT: &str = "Tab focus · Ctrl+Y copy · Ctrl+L clear · Esc quit";

/// Clicks the bar turns into form actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Copy,
    ClearData,
}

/// # Props
///
/// - `can_copy`: Whether the merged result is non-empty
/// - `copy_status`: Whether a copy just succeeded
///
/// # State
///
/// - `copy_area` / `clear_area`: Button rectangles from the last render
#[derive(Default)]
pub struct ButtonBar {
    pub can_copy: bool,
    pub copy_status: bool,
    copy_area: Rect,
    clear_area: Rect,
}

impl ButtonBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn copy_label(&self) -> &'static str {
        if self.copy_status { COPIED_LABEL } else { COPY_LABEL }
    }

    /// Which button (if any) was drawn at the given screen cell.
    /// A disabled Copy button does not respond.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ButtonEvent> {
        let position = Position::new(column, row);
        if self.copy_area.contains(position) {
            return self.can_copy.then_some(ButtonEvent::Copy);
        }
        if self.clear_area.contains(position) {
            return Some(ButtonEvent::ClearData);
        }
        None
    }
}

impl Component for ButtonBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let copy_label = self.copy_label();
        let [copy_area, _, clear_area, _, hint_area] = Layout::horizontal([
            Constraint::Length(copy_label.chars().count() as u16),
            Constraint::Length(1),
            Constraint::Length(CLEAR_LABEL.len() as u16),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        let copy_style = if !self.can_copy {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        } else if self.copy_status {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        };
        let clear_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD);

        frame.render_widget(Span::styled(copy_label, copy_style), copy_area);
        frame.render_widget(Span::styled(CLEAR_LABEL, clear_style), clear_area);
        frame.render_widget(
            Span::styled(KEY_HINT, Style::default().fg(Color::DarkGray)),
            hint_area,
        );

        self.copy_area = copy_area;
        self.clear_area = clear_area;
    }
}

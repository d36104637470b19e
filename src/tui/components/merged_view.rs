//! # MergedView Component
//!
//! Read-only, scrollable display of the merged result.
//!
//! The text itself is a prop refreshed from `App::merged()` every frame; the
//! scroll position is the only state kept here, so it survives edits. When
//! the result shrinks the offset is clamped on the next render.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Merged text will appear here...";

/// Column taken by the vertical scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

#[derive(Default)]
pub struct MergedView {
    pub merged: String,
    scroll_state: ScrollViewState,
}

impl MergedView {
    pub fn new(merged: String) -> Self {
        Self {
            merged,
            scroll_state: ScrollViewState::default(),
        }
    }

    /// First visible wrapped row.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn render_placeholder(frame: &mut Frame, inner: Rect) {
        let placeholder = Paragraph::new(PLACEHOLDER)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(placeholder, inner);
    }
}

impl Component for MergedView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Merged Result");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.merged.is_empty() {
            self.scroll_state.scroll_to_top();
            Self::render_placeholder(frame, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(SCROLLBAR_WIDTH).max(1);
        let paragraph = Paragraph::new(self.merged.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        let content_height = paragraph
            .line_count(content_width)
            .clamp(1, u16::MAX as usize) as u16;

        // Keep the last row at the bottom edge at most
        let max_offset = content_height.saturating_sub(inner.height);
        if self.scroll_offset() > max_offset {
            self.scroll_state.set_offset(Position { x: 0, y: max_offset });
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.scroll_state);
    }
}

impl EventHandler for MergedView {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

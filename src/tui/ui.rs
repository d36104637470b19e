use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, BufferId};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

const SUBTITLE: &str =
    "Combine text from two sources into one. Your changes are merged in real-time.";

/// Below this width the two sources are stacked instead of side by side.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 60;

/// Screen regions of the form, cached after each draw for mouse hit-testing.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FormLayout {
    pub title: Rect,
    pub subtitle: Rect,
    pub source1: Rect,
    pub source2: Rect,
    pub result: Rect,
    pub buttons: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect) -> Self {
        use Constraint::{Fill, Length};
        let [title, subtitle, sources, result, buttons] =
            Layout::vertical([Length(1), Length(1), Fill(1), Fill(1), Length(1)]).areas(area);

        let sources_layout = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::horizontal([Fill(1), Fill(1)])
        } else {
            Layout::vertical([Fill(1), Fill(1)])
        };
        let [source1, source2] = sources_layout.areas(sources);

        Self {
            title,
            subtitle,
            source1,
            source2,
            result,
            buttons,
        }
    }

    pub fn source_area(&self, id: BufferId) -> Rect {
        match id {
            BufferId::Source1 => self.source1,
            BufferId::Source2 => self.source2,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = FormLayout::compute(frame.area());
    tui.layout = layout;

    TitleBar::new(app.status_message.clone()).render(frame, layout.title);
    frame.render_widget(
        Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray)),
        layout.subtitle,
    );

    for id in BufferId::ALL {
        let focused = tui.focus == id;
        let editor = tui.editor_mut(id);
        editor.focused = focused;
        editor.render(frame, layout.source_area(id));
    }

    tui.merged_view.merged = app.merged();
    tui.merged_view.render(frame, layout.result);

    tui.button_bar.can_copy = app.can_copy();
    tui.button_bar.copy_status = app.copy_status;
    tui.button_bar.render(frame, layout.buttons);
}

/// Which source editor (if any) covers the given screen cell.
pub fn hit_test_source(layout: &FormLayout, column: u16, row: u16) -> Option<BufferId> {
    let position = Position::new(column, row);
    BufferId::ALL
        .into_iter()
        .find(|id| layout.source_area(*id).contains(position))
}

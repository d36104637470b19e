//! Cursor position tracking and navigation for the SourceEditor.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. All
//! navigation methods accept `buffer: &str` explicitly; the text data is
//! owned by `SourceEditor`, keeping the dependency visible.

use super::text_wrap::{BORDER_OFFSET, inner_width, wrap_line_count, wrap_options, wrapped_lines};
use ratatui::layout::Rect;

/// Cursor and scroll state, separated from the text buffer.
#[derive(Debug, Default)]
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped row
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Start of the logical line containing the cursor.
    pub fn line_start(&self, buffer: &str) -> usize {
        buffer[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    /// End of the logical line containing the cursor (before its `'\n'`).
    pub fn line_end(&self, buffer: &str) -> usize {
        buffer[self.pos..]
            .find('\n')
            .map(|i| self.pos + i)
            .unwrap_or(buffer.len())
    }

    /// Move to the previous (`direction < 0`) or next logical line, keeping the
    /// character column where the target line is long enough.
    ///
    /// Returns `true` if cursor moved, `false` if already at boundary.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let line_start = self.line_start(buffer);
        let column = buffer[line_start..self.pos].chars().count();

        let target_start = if direction < 0 {
            if line_start == 0 {
                return false;
            }
            buffer[..line_start - 1]
                .rfind('\n')
                .map(|i| i + 1)
                .unwrap_or(0)
        } else {
            match buffer[self.pos..].find('\n') {
                Some(i) => self.pos + i + 1,
                None => return false,
            }
        };

        let target_end = buffer[target_start..]
            .find('\n')
            .map(|i| target_start + i)
            .unwrap_or(buffer.len());
        let target_line = &buffer[target_start..target_end];
        let offset = target_line
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(target_line.len());

        self.pos = target_start + offset;
        true
    }

    /// Wrapped (row, column) of the cursor, relative to the top of the text.
    pub fn visual_position(&self, buffer: &str, content_width: u16) -> (u16, u16) {
        let width = inner_width(content_width);
        if width == 0 {
            return (0, 0);
        }

        let line_start = self.line_start(buffer);
        let rows_above = if line_start == 0 {
            0
        } else {
            wrapped_lines(&buffer[..line_start - 1], width).len()
        };

        // Count chars from the line start (preserves spaces that textwrap trims)
        let prefix = &buffer[line_start..self.pos];
        let segments = textwrap::wrap(prefix, wrap_options(width));
        let total_chars = prefix.chars().count();
        let (row_in_line, col) = if segments.len() <= 1 {
            (0, total_chars)
        } else {
            let chars_in_prev_segments: usize = segments
                .iter()
                .take(segments.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            (
                segments.len() - 1,
                total_chars.saturating_sub(chars_in_prev_segments),
            )
        };

        // A cursor past a full row sits at the start of the next one
        let (row_in_line, col) = if col >= width as usize {
            (row_in_line + 1, 0)
        } else {
            (row_in_line, col)
        };

        let row = (rows_above + row_in_line).min(u16::MAX as usize) as u16;
        (row, col as u16)
    }

    /// Update scroll offset to keep cursor visible within `visible_rows`.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16, visible_rows: u16) {
        if visible_rows == 0 {
            self.scroll_offset = 0;
            return;
        }
        let (cursor_row, _) = self.visual_position(buffer, content_width);
        // The cursor may sit on a row of its own after a full line
        let total_rows = wrap_line_count(buffer, inner_width(content_width)).max(cursor_row + 1);
        if total_rows <= visible_rows {
            self.scroll_offset = 0;
            return;
        }

        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + visible_rows {
            self.scroll_offset = cursor_row.saturating_sub(visible_rows - 1);
        }
        // Never leave blank space below the last row
        self.scroll_offset = self.scroll_offset.min(total_rows - visible_rows);
    }

    /// Screen position for the terminal cursor. Returns (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let (row, col) = self.visual_position(buffer, area.width);
        let visible_row = row.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + col,
            area.y + BORDER_OFFSET + visible_row,
        )
    }
}

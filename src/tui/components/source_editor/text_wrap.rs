//! Pure text wrapping utilities and dimensional constants for the SourceEditor.
//!
//! These are stateless helpers with no dependency on SourceEditor or CursorState.

/// Left + right borders consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Build textwrap options configured for the editor inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Number of text rows that fit inside the bordered block.
pub(super) fn inner_height(content_height: u16) -> u16 {
    content_height.saturating_sub(VERTICAL_OVERHEAD)
}

/// Wrap every logical line of `text` to `width`.
///
/// Unlike a single `textwrap::wrap` call, every `'\n'` starts a new row, so a
/// trailing newline always shows up as an empty last row.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let options = wrap_options(width);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let wrapped = textwrap::wrap(line, &options);
        if wrapped.is_empty() {
            rows.push(String::new());
        } else {
            rows.extend(wrapped.into_iter().map(|row| row.into_owned()));
        }
    }
    rows
}

/// Count wrapped rows for the given text (always at least 1).
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    wrapped_lines(text, width).len().min(u16::MAX as usize) as u16
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- wrap_line_count -------------------------------------------------

    #[test]
    fn wrap_line_count_empty_string() {
        assert_eq!(wrap_line_count("", 80), 1);
    }

    #[test]
    fn wrap_line_count_zero_width() {
        assert_eq!(wrap_line_count("hello", 0), 1);
    }

    #[test]
    fn wrap_line_count_wraps_long_text() {
        // 10 chars into a 5-wide column -> 2 lines
        assert_eq!(wrap_line_count("aaaaaaaaaa", 5), 2);
    }

    #[test]
    fn wrap_line_count_trailing_newline_adds_line() {
        assert_eq!(wrap_line_count("hello\n", 80), 2);
    }

    #[test]
    fn wrap_line_count_explicit_newlines() {
        assert_eq!(wrap_line_count("a\nb\nc", 80), 3);
    }

    #[test]
    fn wrap_line_count_blank_lines_kept() {
        assert_eq!(wrap_line_count("a\n\n\nb", 80), 4);
    }

    // -- wrapped_lines ---------------------------------------------------

    #[test]
    fn wrapped_lines_splits_and_wraps() {
        assert_eq!(
            wrapped_lines("aaaaaaaaaa\nb", 5),
            vec!["aaaaa".to_string(), "aaaaa".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn wrapped_lines_trailing_newline() {
        assert_eq!(wrapped_lines("a\n", 80), vec!["a".to_string(), String::new()]);
    }

    // -- inner dimensions ------------------------------------------------

    #[test]
    fn inner_dimensions_saturate() {
        assert_eq!(inner_width(1), 0);
        assert_eq!(inner_width(10), 8);
        assert_eq!(inner_height(2), 0);
        assert_eq!(inner_height(7), 5);
    }

    // -- char boundaries -------------------------------------------------

    #[test]
    fn prev_char_boundary_ascii() {
        assert_eq!(prev_char_boundary("abc", 2), 1);
    }

    #[test]
    fn prev_char_boundary_multibyte() {
        // "café" = [99, 97, 102, 195, 169]: 'é' starts at byte 3, len 2
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
    }

    #[test]
    fn prev_char_boundary_emoji() {
        // "a🔥b": emoji is 4 bytes at offset 1
        let s = "a🔥b";
        assert_eq!(prev_char_boundary(s, 5), 1);
        assert_eq!(prev_char_boundary(s, 1), 0);
    }

    #[test]
    fn next_char_boundary_ascii() {
        assert_eq!(next_char_boundary("abc", 0), 1);
        assert_eq!(next_char_boundary("abc", 2), 3);
    }

    #[test]
    fn next_char_boundary_multibyte() {
        let s = "café";
        assert_eq!(next_char_boundary(s, 3), 5);
        assert_eq!(next_char_boundary(s, 2), 3);
    }

    #[test]
    fn next_char_boundary_emoji() {
        let s = "a🔥b";
        assert_eq!(next_char_boundary(s, 1), 5);
    }
}

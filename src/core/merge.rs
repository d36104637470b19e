//! # Line Merge
//!
//! Pairs the two sources line by line:
//!
//! ```text
//! "a\nb"  +  "x"   →   "a - x\nb - "
//! ```
//!
//! Both inputs are split on `'\n'` with standard split semantics, so a
//! trailing newline yields a trailing empty line. The shorter side is padded
//! with empty lines. A row where both sides are empty stays empty rather
//! than becoming a lone separator.

/// Joins the left and right halves of a merged line.
pub const MERGE_SEPARATOR: &str = " - ";

/// Merge two texts line by line.
pub fn merge(left: &str, right: &str) -> String {
    if left.is_empty() && right.is_empty() {
        return String::new();
    }

    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let rows = left_lines.len().max(right_lines.len());

    (0..rows)
        .map(|i| {
            let a = left_lines.get(i).copied().unwrap_or("");
            let b = right_lines.get(i).copied().unwrap_or("");
            if a.is_empty() && b.is_empty() {
                String::new()
            } else {
                format!("{a}{MERGE_SEPARATOR}{b}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

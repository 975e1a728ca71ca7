//! Line classification for indentation navigation
//!
//! Indentation is measured in display columns: a tab advances to the next
//! multiple of the tab stop, any other whitespace advances by its display
//! width. Width is always recomputed from the current text, never cached,
//! since the document can change between calls.

use unicode_width::UnicodeWidthChar;

use crate::constants::layout;

/// Check whether a line is blank (empty or whitespace-only)
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Indentation width of a line in display columns
pub fn indent_width(line: &str, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            col += tab_stop - (col % tab_stop);
        } else if ch.is_whitespace() {
            col += UnicodeWidthChar::width(ch).unwrap_or(1);
        } else {
            break;
        }
    }
    col
}

/// 1-based display column of the first non-whitespace character
///
/// Falls back to column 1 when the line is blank.
pub fn first_non_ws_column(line: &str, tab_stop: usize) -> usize {
    if is_blank(line) {
        return layout::FIRST_COLUMN;
    }
    indent_width(line, tab_stop) + 1
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

//! The line source the navigator operates on
//!
//! [`LineSource`] is the host-side collaborator: it owns the document, the
//! cursor, and the selection. Lines and columns are 1-based; a position is
//! valid iff `1 <= pos <= line_count()`. The derived indentation queries
//! have default implementations so hosts only supply storage and
//! cursor/selection plumbing. [`Lines`] is a ready-made in-memory source
//! for hosts that keep plain line buffers.

use crate::constants::layout;
use crate::indent;

/// Abstract line-indexed text source with a cursor and a linewise selection
pub trait LineSource {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Text of line `pos`, or `None` when `pos` is out of range
    fn text_of(&self, pos: usize) -> Option<&str>;

    /// Tab stop used when measuring indentation
    fn tab_stop(&self) -> usize {
        layout::DEFAULT_TAB_STOP
    }

    /// Indentation width of line `pos` in display columns
    ///
    /// `None` signals an invalid position; callers must abort without
    /// touching cursor or selection.
    fn indent_width_of(&self, pos: usize) -> Option<usize> {
        self.text_of(pos)
            .map(|text| indent::indent_width(text, self.tab_stop()))
    }

    /// 1-based column of the first non-whitespace character of line `pos`
    ///
    /// Falls back to column 1 for blank or out-of-range lines.
    fn first_non_ws_column(&self, pos: usize) -> usize {
        self.text_of(pos)
            .map(|text| indent::first_non_ws_column(text, self.tab_stop()))
            .unwrap_or(layout::FIRST_COLUMN)
    }

    /// Line the cursor is currently on
    fn cursor(&self) -> usize;

    /// Move the cursor to line `pos`, column `column`
    fn set_cursor(&mut self, pos: usize, column: usize);

    /// Start line of the active selection, `None` when no selection is active
    fn selection_start(&self) -> Option<usize>;

    /// Replace the selection with the inclusive linewise range `[start, end]`
    fn set_selection(&mut self, start: usize, end: usize);
}

/// In-memory [`LineSource`] over owned lines
#[derive(Debug, Clone)]
pub struct Lines {
    lines: Vec<String>,
    cursor: usize,
    column: usize,
    selection: Option<(usize, usize)>,
    tab_stop: usize,
}

impl Lines {
    /// Create a source from owned lines, cursor on line 1
    pub fn new(lines: Vec<String>) -> Self {
        Lines {
            lines,
            cursor: layout::FIRST_LINE,
            column: layout::FIRST_COLUMN,
            selection: None,
            tab_stop: layout::DEFAULT_TAB_STOP,
        }
    }

    /// Create a source by splitting `text` on newlines
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    /// Override the tab stop used for indentation measurement
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    /// Place the cursor on `pos` (clamped to the document) at column 1
    pub fn with_cursor(mut self, pos: usize) -> Self {
        self.cursor = pos.clamp(layout::FIRST_LINE, self.lines.len().max(layout::FIRST_LINE));
        self.column = layout::FIRST_COLUMN;
        self
    }

    /// Current cursor column
    pub fn column(&self) -> usize {
        self.column
    }

    /// Current selection, if any
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }
}

impl LineSource for Lines {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn text_of(&self, pos: usize) -> Option<&str> {
        if pos < layout::FIRST_LINE {
            return None;
        }
        self.lines.get(pos - 1).map(String::as_str)
    }

    fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize, column: usize) {
        self.cursor = pos;
        self.column = column;
    }

    fn selection_start(&self) -> Option<usize> {
        self.selection.map(|(start, _)| start)
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Some((start, end));
    }
}

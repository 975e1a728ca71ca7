//! Test utilities
//! Shared testing helpers and mocks

use crate::constants::layout;
use crate::source::LineSource;

/// Mock line source for testing
/// Records all cursor and selection mutations for verification
pub struct MockLineSource {
    pub lines: Vec<String>,
    pub cursor: usize,
    pub column: usize,
    pub selection: Option<(usize, usize)>,
    pub tab_stop: usize,
    pub cursor_sets: Vec<(usize, usize)>,
    pub selection_sets: Vec<(usize, usize)>,
}

impl MockLineSource {
    /// Create a mock over the given lines, cursor on line 1
    pub fn new(lines: &[&str]) -> Self {
        MockLineSource {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            cursor: layout::FIRST_LINE,
            column: layout::FIRST_COLUMN,
            selection: None,
            tab_stop: layout::DEFAULT_TAB_STOP,
            cursor_sets: Vec::new(),
            selection_sets: Vec::new(),
        }
    }

    /// Place the cursor on `pos` (unclamped, so tests can model stale
    /// cursors past the end of the document)
    pub fn at_line(mut self, pos: usize) -> Self {
        self.cursor = pos;
        self
    }

    /// Whether any cursor or selection mutation was recorded
    pub fn mutated(&self) -> bool {
        !self.cursor_sets.is_empty() || !self.selection_sets.is_empty()
    }

    /// Clear all recorded mutations (useful for testing multiple calls)
    pub fn clear(&mut self) {
        self.cursor_sets.clear();
        self.selection_sets.clear();
    }
}

impl LineSource for MockLineSource {
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
        self.cursor_sets.push((pos, column));
        self.cursor = pos;
        self.column = column;
    }

    fn selection_start(&self) -> Option<usize> {
        self.selection.map(|(start, _)| start)
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection_sets.push((start, end));
        self.selection = Some((start, end));
    }
}

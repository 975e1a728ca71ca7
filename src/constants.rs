//! Global constants for indent-nav

pub mod layout {
    /// Default number of display columns between tab stops
    pub const DEFAULT_TAB_STOP: usize = 8;

    /// Leftmost column of a line (columns are 1-based)
    pub const FIRST_COLUMN: usize = 1;

    /// First line of a document (lines are 1-based)
    pub const FIRST_LINE: usize = 1;
}

pub mod commands {
    /// Move to the next line at the same or lower indentation
    pub const NEXT_INDENT_BLOCK: &str = "next-indent-block";

    /// Move to the previous line at the same or lower indentation
    pub const PREV_INDENT_BLOCK: &str = "prev-indent-block";

    /// Operator-pending motion covering the indented block
    pub const INDENT_BLOCK_MOTION: &str = "indent-block-motion";

    /// Extend the visual selection over the indented block
    pub const INDENT_BLOCK_SELECT: &str = "indent-block-select";
}

pub mod errors {
    // Error Codes
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
}

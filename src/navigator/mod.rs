//! Indentation-aware navigation over a [`LineSource`]
//!
//! ## Design
//!
//! Two families of operations share the same indentation measure:
//!
//! - **Skip scans** ([`IndentNavigator::skip_forward`],
//!   [`IndentNavigator::skip_backward`]) move the cursor to the nearest
//!   non-blank line whose indentation is less than or equal to the current
//!   line's. Blank lines are transparent: they are neither evaluated nor
//!   stopped upon.
//! - **Block extent** ([`IndentNavigator::block_end`],
//!   [`IndentNavigator::extend_block`]) walks the run of strictly deeper
//!   lines below an anchor, then absorbs any trailing blank lines, and
//!   applies the result as an inclusive linewise selection.
//!
//! Every operation either performs its full state change or leaves the
//! host untouched; boundary conditions and failed line lookups are silent
//! no-ops. The navigator holds no state between calls.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::indent::is_blank;
use crate::source::LineSource;

/// How a block-extent request is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentMode {
    /// A pending operator awaits the motion; anchor at the cursor line and
    /// establish the linewise selection from scratch
    OperatorPending,
    /// Extend the active visual selection from its original anchor
    VisualExtend,
}

/// Stateless navigator over a host-owned [`LineSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentNavigator;

static SHARED: OnceLock<IndentNavigator> = OnceLock::new();

impl IndentNavigator {
    pub fn new() -> Self {
        IndentNavigator
    }

    /// Process-wide instance, created on first use
    ///
    /// Repeated calls return the same navigator; hosts that register the
    /// commands more than once share it.
    pub fn shared() -> &'static IndentNavigator {
        SHARED.get_or_init(IndentNavigator::new)
    }

    /// Move the cursor forward to the next non-blank line whose
    /// indentation is less than or equal to the current line's
    ///
    /// Returns `true` if the cursor moved, `false` if already on the last
    /// line or no qualifying line exists.
    pub fn skip_forward(&self, source: &mut impl LineSource) -> bool {
        let total = source.line_count();
        let cur = source.cursor();
        if cur >= total {
            return false;
        }
        let Some(base) = source.indent_width_of(cur) else {
            return false;
        };

        let mut pos = cur + 1;
        while pos <= total {
            let blank = match source.text_of(pos) {
                Some(text) => is_blank(text),
                None => return false,
            };
            if !blank {
                match source.indent_width_of(pos) {
                    Some(width) if width <= base => {
                        let column = source.first_non_ws_column(pos);
                        debug!(from = cur, to = pos, column, "skip_forward");
                        source.set_cursor(pos, column);
                        return true;
                    }
                    Some(_) => {}
                    None => return false,
                }
            }
            pos += 1;
        }

        trace!(from = cur, base, "skip_forward exhausted document");
        false
    }

    /// Move the cursor backward to the previous non-blank line whose
    /// indentation is less than or equal to the current line's
    ///
    /// Returns `true` if the cursor moved, `false` if already on line 1 or
    /// no qualifying line exists.
    pub fn skip_backward(&self, source: &mut impl LineSource) -> bool {
        let cur = source.cursor();
        if cur <= 1 {
            return false;
        }
        let Some(base) = source.indent_width_of(cur) else {
            return false;
        };

        let mut pos = cur - 1;
        while pos >= 1 {
            let blank = match source.text_of(pos) {
                Some(text) => is_blank(text),
                None => return false,
            };
            if !blank {
                match source.indent_width_of(pos) {
                    Some(width) if width <= base => {
                        let column = source.first_non_ws_column(pos);
                        debug!(from = cur, to = pos, column, "skip_backward");
                        source.set_cursor(pos, column);
                        return true;
                    }
                    Some(_) => {}
                    None => return false,
                }
            }
            pos -= 1;
        }

        trace!(from = cur, base, "skip_backward exhausted document");
        false
    }

    /// Last line of the indented block rooted at `start`
    ///
    /// The block is the run of lines strictly deeper than `start`, plus
    /// any blank lines immediately after that run. Returns `start` itself
    /// when no line qualifies, and `None` when `start` does not resolve to
    /// a valid line.
    pub fn block_end(&self, source: &impl LineSource, start: usize) -> Option<usize> {
        let base = source.indent_width_of(start)?;
        let total = source.line_count();
        let mut end = start;
        let mut pos = start + 1;

        // Indented body: strictly deeper lines belong to the block.
        while pos <= total {
            match source.indent_width_of(pos) {
                Some(width) if width > base => {
                    end = pos;
                    pos += 1;
                }
                _ => break,
            }
        }

        // Blank lines trailing the body belong to the block as well.
        while pos <= total {
            match source.text_of(pos) {
                Some(text) if is_blank(text) => {
                    end = pos;
                    pos += 1;
                }
                _ => break,
            }
        }

        Some(end)
    }

    /// Select the indented block under the anchor implied by `mode`
    ///
    /// `OperatorPending` anchors at the cursor line; `VisualExtend`
    /// re-establishes the selection from its original start line, which
    /// may have been dropped when control transferred to the navigator.
    /// Returns `true` if the selection was set, `false` if the block is a
    /// single line, the anchor is invalid, or no selection is active in
    /// `VisualExtend` mode.
    pub fn extend_block(&self, source: &mut impl LineSource, mode: ExtentMode) -> bool {
        let anchor = match mode {
            ExtentMode::OperatorPending => source.cursor(),
            ExtentMode::VisualExtend => match source.selection_start() {
                Some(start) => start,
                None => {
                    trace!("extend_block with no active selection");
                    return false;
                }
            },
        };

        let Some(end) = self.block_end(&*source, anchor) else {
            trace!(anchor, "extend_block anchor did not resolve");
            return false;
        };
        if end <= anchor {
            return false;
        }

        debug!(?mode, anchor, end, "indent block selection");
        source.set_selection(anchor, end);
        true
    }
}

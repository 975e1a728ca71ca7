//! Host-facing commands
//! Translates stable command names into navigator invocations

use std::str::FromStr;

use crate::constants::{commands, errors};
use crate::error::{ErrorKind, NavError};
use crate::navigator::{ExtentMode, IndentNavigator};
use crate::source::LineSource;

/// Commands a host can register and bind keys to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Move to the next line at the same or lower indentation
    NextIndentBlock,
    /// Move to the previous line at the same or lower indentation
    PrevIndentBlock,
    /// Operator-pending motion covering the indented block under the cursor
    BlockMotion,
    /// Extend the visual selection over the indented block
    BlockSelect,
}

impl NavCommand {
    /// Stable name the host registers the command under
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextIndentBlock => commands::NEXT_INDENT_BLOCK,
            Self::PrevIndentBlock => commands::PREV_INDENT_BLOCK,
            Self::BlockMotion => commands::INDENT_BLOCK_MOTION,
            Self::BlockSelect => commands::INDENT_BLOCK_SELECT,
        }
    }

    /// Execute against the host's line source
    ///
    /// Returns `true` when the cursor or selection changed; boundary
    /// conditions and failed lookups come back as `false` with the host
    /// state untouched.
    pub fn execute(&self, source: &mut impl LineSource) -> bool {
        let nav = IndentNavigator::shared();
        match self {
            Self::NextIndentBlock => nav.skip_forward(source),
            Self::PrevIndentBlock => nav.skip_backward(source),
            Self::BlockMotion => nav.extend_block(source, ExtentMode::OperatorPending),
            Self::BlockSelect => nav.extend_block(source, ExtentMode::VisualExtend),
        }
    }
}

impl FromStr for NavCommand {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            commands::NEXT_INDENT_BLOCK => Ok(Self::NextIndentBlock),
            commands::PREV_INDENT_BLOCK => Ok(Self::PrevIndentBlock),
            commands::INDENT_BLOCK_MOTION => Ok(Self::BlockMotion),
            commands::INDENT_BLOCK_SELECT => Ok(Self::BlockSelect),
            _ => Err(NavError::new(
                ErrorKind::Parse,
                errors::UNKNOWN_COMMAND,
                format!("Unknown command: {}", s),
            )),
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

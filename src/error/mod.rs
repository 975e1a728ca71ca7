//! Centralized error handling for indent-nav
//!
//! Navigation itself never surfaces errors: boundary conditions and failed
//! line lookups are absorbed as silent no-ops. The structured error type
//! exists for the host-facing surfaces that can genuinely fail, such as
//! command-name parsing.

use std::fmt;

use crate::constants::errors;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Command-name parsing errors
    Parse,
    /// Line source lookup errors
    Source,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "Parse"),
            Self::Source => write!(f, "Source"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in indent-nav
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "UNKNOWN_COMMAND")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl NavError {
    /// Create a new error
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for NavError {}

impl From<String> for NavError {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Other, errors::GENERIC_ERROR, msg)
    }
}

impl From<&str> for NavError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorKind::Other, errors::GENERIC_ERROR, msg)
    }
}

/// Result alias for indent-nav operations
pub type Result<T> = std::result::Result<T, NavError>;

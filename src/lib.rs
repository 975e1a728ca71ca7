//! indent-nav - Indentation-aware block navigation
//!
//! Moves a cursor between lines at the same or lower indentation and
//! computes the extent of the indented block under a line, over any host
//! that implements [`source::LineSource`].

pub mod command;
pub mod constants;
pub mod error;
pub mod indent;
pub mod navigator;
pub mod source;
pub mod test_utils;

//! Structural brace translation
//!
//! A line holding only `{` or only `}`. Both braces pass through unchanged;
//! what matters is how they move the depth.

use crate::translate::Emission;

pub fn is_block_open(trimmed: &str) -> bool {
    trimmed == "{"
}

/// Emitted at the current depth, then the depth goes up
pub fn process_block_open(_trimmed: &str) -> Emission {
    Emission::open("{")
}

pub fn is_block_close(trimmed: &str) -> bool {
    trimmed == "}"
}

/// The depth goes down first, so the brace lines up with its opener
pub fn process_block_close(_trimmed: &str) -> Emission {
    Emission::close("}")
}

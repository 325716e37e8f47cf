//! Statement and passthrough translation
//!
//! The two catch-all rules. Neither rewrites anything: a line the earlier
//! rules did not claim is emitted verbatim at the current depth, even when
//! the result is not valid JavaScript.

use crate::translate::Emission;

/// Any remaining line ending in `;`
pub fn is_terminated_statement(trimmed: &str) -> bool {
    trimmed.ends_with(';')
}

pub fn process_terminated_statement(trimmed: &str) -> Emission {
    Emission::keep(trimmed)
}

/// Matches every line
pub fn is_passthrough(_trimmed: &str) -> bool {
    true
}

pub fn process_passthrough(trimmed: &str) -> Emission {
    Emission::keep(trimmed)
}

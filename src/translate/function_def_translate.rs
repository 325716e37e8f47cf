//! Function Definition Translation
//!
//! Translates C function signatures to JavaScript function declarations.
//!
//! ```text
//! int main(void) {          ->   function main() {
//! int add(int a, int b)     ->   function add(a, b)
//! ```
//!
//! The entry point always opens its block. A generic signature never does:
//! a trailing `{` on its line is kept as text, and only a following bare
//! `{` line raises the depth.

use crate::helpers::{is_control_keyword, reduce_parameter};
use crate::patterns::{ENTRY_POINT_RE, FUNCTION_SIGNATURE_RE};
use crate::translate::Emission;

/// Fixed declaration emitted for the entry point
pub const ENTRY_POINT_DECLARATION: &str = "function main() {";

/// Check if a line declares the entry point
pub fn is_entry_point_signature(trimmed: &str) -> bool {
    !trimmed.ends_with(';') && ENTRY_POINT_RE.is_match(trimmed)
}

pub fn process_entry_point(_trimmed: &str) -> Emission {
    Emission::open(ENTRY_POINT_DECLARATION)
}

/// Check if a line is a `<type> <name>(<params>)` signature.
///
/// Calls and prototypes end with `;` and are rejected, as are lines led by
/// a control keyword such as `else if (x)` or `return f(x)`.
pub fn is_function_signature(trimmed: &str) -> bool {
    if trimmed.ends_with(';') {
        return false;
    }
    FUNCTION_SIGNATURE_RE
        .captures(trimmed)
        .is_some_and(|caps| !is_control_keyword(&caps[1]) && !is_control_keyword(&caps[2]))
}

/// Rewrite the parameter list: types dropped, identifiers joined by `", "`
pub fn reduce_parameters(params: &str) -> String {
    params
        .split(',')
        .filter_map(reduce_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rewrite a generic signature, discarding the return type.
///
/// Anything after the closing paren, including a `{`, is kept as written.
pub fn process_function_signature(trimmed: &str) -> Emission {
    let Some(caps) = FUNCTION_SIGNATURE_RE.captures(trimmed) else {
        return Emission::keep(trimmed);
    };

    let name = &caps[2];
    let params = reduce_parameters(&caps[3]);
    let rest = &trimmed[caps.get(0).map_or(trimmed.len(), |m| m.end())..];
    Emission::keep(format!("function {name}({params}){rest}"))
}

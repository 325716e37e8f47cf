//! Declaration Translation
//!
//! Scalar declarations become `let` bindings. The type keyword is the only
//! thing replaced; the name and any initializer pass through verbatim.
//!
//! ```text
//! int a = 10;        ->   let a = 10;
//! double ratio;      ->   let ratio;
//! ```
//!
//! Only `int`, `float`, `double` and `char` are recognized here.

use crate::patterns::{DECL_RE, DECL_WITH_INIT_RE};
use crate::translate::Emission;

/// Keyword introducing a mutable binding in the generated code
pub const BINDING_KEYWORD: &str = "let";

pub fn is_declaration_with_init(trimmed: &str) -> bool {
    DECL_WITH_INIT_RE.is_match(trimmed)
}

/// `<type> <name> = <expr>;` -> `let <name> = <expr>;`
pub fn process_declaration_with_init(trimmed: &str) -> Emission {
    match DECL_WITH_INIT_RE.captures(trimmed) {
        Some(caps) => Emission::keep(format!("{BINDING_KEYWORD} {}", &caps[1])),
        None => Emission::keep(trimmed),
    }
}

pub fn is_declaration(trimmed: &str) -> bool {
    DECL_RE.is_match(trimmed)
}

/// `<type> <name>;` -> `let <name>;`
pub fn process_declaration(trimmed: &str) -> Emission {
    let Some(caps) = DECL_RE.captures(trimmed) else {
        return Emission::keep(trimmed);
    };
    let end = caps.get(0).map_or(trimmed.len(), |m| m.end());
    Emission::keep(format!("{BINDING_KEYWORD} {};{}", &caps[1], &trimmed[end..]))
}

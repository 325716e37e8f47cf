//! Counting loop header translation
//!
//! `for (int i = 0; i < n; i++) {` declares its counter with a C type. The
//! type keyword becomes `let`; the rest of the header is left alone, and the
//! header's brace does not move the depth (same as `if` and `while`).

use crate::patterns::LOOP_HEADER_RE;
use crate::translate::declaration_translate::BINDING_KEYWORD;
use crate::translate::Emission;

pub fn is_typed_loop_header(trimmed: &str) -> bool {
    LOOP_HEADER_RE.is_match(trimmed)
}

pub fn process_typed_loop_header(trimmed: &str) -> Emission {
    let Some(keyword) = LOOP_HEADER_RE.captures(trimmed).and_then(|caps| caps.get(1)) else {
        return Emission::keep(trimmed);
    };
    Emission::keep(format!(
        "{}{}{}",
        &trimmed[..keyword.start()],
        BINDING_KEYWORD,
        &trimmed[keyword.end()..]
    ))
}

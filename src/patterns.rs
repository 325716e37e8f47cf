//! Line Recognition Patterns
//!
//! Every recognizer regex is compiled once, on first use, through `LazyLock`.
//! The patterns only ever see a trimmed line, so none of them carry
//! leading-whitespace anchors.

use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. All patterns here are constants
/// exercised by the module tests, so the panic can only fire on the first
/// access after an edit that broke one of them.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

/// Scalar type keywords accepted by the declaration and loop recognizers
const SCALAR_TYPE_ALT: &str = r"(?:int|float|double|char)";

/// `int main()`, `int main(void)`, `main( VOID )`, with or without a brace
pub static ENTRY_POINT_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(?:\w+\s+)?main\s*\(\s*(?i:void)?\s*\)"));

/// `<type> <name>(<params>)`; captures return type, name and the raw params
pub static FUNCTION_SIGNATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^(\w+)\s+(\w+)\s*\((.*)\)"));

/// `<type> <name> = <expr>`; captures everything after the type keyword
pub static DECL_WITH_INIT_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&format!(r"^{SCALAR_TYPE_ALT}\s+(\w+\s*=.*)")));

/// `<type> <name>;`; captures the name
pub static DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&format!(r"^{SCALAR_TYPE_ALT}\s+(\w+);")));

/// `printf("<format>", <args>)`; captures the format and the optional args
pub static PRINTF_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r#"\bprintf\s*\("([^"]*)"\s*(?:,\s*(.+))?\)"#));

/// Format placeholders substituted positionally
pub static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"%[dfcs]"));

/// `for (int i = ...`; captures the type keyword of the init clause
pub static LOOP_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(&format!(r"^for\s*\(\s*({SCALAR_TYPE_ALT})\s+")));

/// A statement invoking the entry point: `main();` as a whole word
pub static ENTRY_INVOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"(?:^|[^\w.])main\s*\(\s*\)\s*;"));

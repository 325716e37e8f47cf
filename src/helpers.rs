//! Helper utility functions for the translator
//!
//! Small text utilities shared by the construct translators:
//! - Control keyword detection
//! - Top-level comma splitting (string and paren aware)
//! - Parameter reduction

/// C keywords that can lead a line shaped like `<word> <word>(...)`
/// without it being a function signature (`else if (x)`, `return f(x)`).
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "switch", "return", "do", "case", "goto", "sizeof",
];

/// Check if a word is a control-flow keyword
pub fn is_control_keyword(word: &str) -> bool {
    CONTROL_KEYWORDS.contains(&word)
}

/// Split on commas that sit outside parentheses, brackets and quoted literals.
///
/// Each piece is trimmed; an all-whitespace input yields no pieces.
pub fn split_top_level_commas(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            escape_next = false;
            current.push(c);
            continue;
        }

        if let Some(q) = quote {
            if c == '\\' {
                escape_next = true;
            } else if c == q {
                quote = None;
            }
            current.push(c);
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }

    if !current.trim().is_empty() || !parts.is_empty() {
        parts.push(current.trim().to_string());
    }

    parts
}

/// Reduce a raw parameter such as `int count` to its trailing identifier.
///
/// The type keyword(s) in front are dropped; a lone `void` yields nothing.
pub fn reduce_parameter(param: &str) -> Option<&str> {
    let last = param.split_whitespace().last()?;
    if last == "void" && param.split_whitespace().count() == 1 {
        return None;
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keywords() {
        assert!(is_control_keyword("else"));
        assert!(is_control_keyword("return"));
        assert!(!is_control_keyword("int"));
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(split_top_level_commas("a, b,c"), vec!["a", "b", "c"]);
        assert!(split_top_level_commas("   ").is_empty());
    }

    #[test]
    fn test_split_respects_nesting() {
        assert_eq!(
            split_top_level_commas("add(a, b), x[1], \"p, q\", ','"),
            vec!["add(a, b)", "x[1]", "\"p, q\"", "','"]
        );
    }

    #[test]
    fn test_split_keeps_empty_middle_piece() {
        assert_eq!(split_top_level_commas("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_reduce_parameter() {
        assert_eq!(reduce_parameter("int a"), Some("a"));
        assert_eq!(reduce_parameter("unsigned int   count"), Some("count"));
        assert_eq!(reduce_parameter("x"), Some("x"));
        assert_eq!(reduce_parameter("void"), None);
        assert_eq!(reduce_parameter("  "), None);
    }
}

//! Line Normalizer
//!
//! Trims every raw source line and decides whether it reaches the dispatcher
//! at all. Blank lines and `#include` directives are dropped here.

const INCLUDE_DIRECTIVE: &str = "#include";

/// One raw input line together with its trimmed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the source text
    pub number: usize,
    pub raw: &'a str,
    pub trimmed: &'a str,
}

/// Why a line was dropped before dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Include,
}

/// Result of normalizing a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized<'a> {
    Skip(SkipReason),
    Line(SourceLine<'a>),
}

/// Trim a raw line and classify it as skipped or kept
pub fn normalize_line(number: usize, raw: &str) -> Normalized<'_> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Normalized::Skip(SkipReason::Blank);
    }
    if trimmed.starts_with(INCLUDE_DIRECTIVE) {
        return Normalized::Skip(SkipReason::Include);
    }

    Normalized::Line(SourceLine { number, raw, trimmed })
}

/// Split source text on newlines and yield only the lines that survive
/// normalization, in input order.
pub fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| match normalize_line(i + 1, raw) {
            Normalized::Line(line) => Some(line),
            Normalized::Skip(_) => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(normalize_line(1, ""), Normalized::Skip(SkipReason::Blank));
        assert_eq!(normalize_line(1, "  \t "), Normalized::Skip(SkipReason::Blank));
        assert_eq!(normalize_line(1, "\r"), Normalized::Skip(SkipReason::Blank));
    }

    #[test]
    fn test_include_skipped() {
        assert_eq!(
            normalize_line(1, "   #include <stdio.h>"),
            Normalized::Skip(SkipReason::Include)
        );
    }

    #[test]
    fn test_other_directives_kept() {
        assert!(matches!(normalize_line(1, "#define N 5"), Normalized::Line(_)));
    }

    #[test]
    fn test_line_trimmed() {
        match normalize_line(7, "    int a = 1;  ") {
            Normalized::Line(line) => {
                assert_eq!(line.number, 7);
                assert_eq!(line.trimmed, "int a = 1;");
                assert_eq!(line.raw, "    int a = 1;  ");
            }
            Normalized::Skip(_) => panic!("line should be kept"),
        }
    }

    #[test]
    fn test_source_lines_order() {
        let src = "#include <stdio.h>\n\nint main() {\n  return 0;\n}\n";
        let kept: Vec<&str> = source_lines(src).map(|l| l.trimmed).collect();
        assert_eq!(kept, vec!["int main() {", "return 0;", "}"]);
    }
}

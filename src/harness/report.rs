//! Harness console output
//!
//! Per-fixture results and the final summary. Mismatches print both strings
//! with whitespace made visible and their character codes, since the usual
//! culprit is an invisible trailing newline.

use std::io::{self, Write};

use crate::harness::runner::{FixtureOutcome, FixtureReport, Summary};

pub mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Applies ANSI colors, or nothing when output is not a terminal
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

/// Newlines become `↵` plus the break itself, then every whitespace char,
/// that break included, becomes `·`.
pub fn visualize_whitespace(s: &str) -> String {
    s.replace('\n', "↵\n")
        .chars()
        .map(|c| if c.is_whitespace() { '·' } else { c })
        .collect()
}

pub fn char_codes(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

pub fn write_banner(out: &mut impl Write, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}\n", painter.paint(ansi::BOLD, "C to JavaScript Compiler Test Runner"))
}

pub fn write_report(out: &mut impl Write, report: &FixtureReport, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}", painter.paint(ansi::BOLD, &format!("Testing {}:", report.name)))?;

    if report.generated.is_some() {
        writeln!(out, "{} {}", painter.paint(ansi::BLUE, "⚙ Compiled"), report.name)?;
    }

    match &report.outcome {
        FixtureOutcome::Passed => {
            writeln!(out, "{}", painter.paint(ansi::GREEN, "✅ Output matches expected"))?;
        }
        FixtureOutcome::Mismatch { expected, actual } => {
            writeln!(out, "{}", painter.paint(ansi::RED, "❌ Output mismatch"))?;
            let expected_label = format!("Expected ({} chars):", expected.chars().count());
            writeln!(out, "{}", painter.paint(ansi::YELLOW, &expected_label))?;
            writeln!(out, "{}", visualize_whitespace(expected))?;
            let actual_label = format!("Got ({} chars):", actual.chars().count());
            writeln!(out, "{}", painter.paint(ansi::YELLOW, &actual_label))?;
            writeln!(out, "{}", visualize_whitespace(actual))?;

            writeln!(out, "\nCharacter codes:")?;
            writeln!(out, "Expected: {:?}", char_codes(expected))?;
            writeln!(out, "Got:      {:?}", char_codes(actual))?;
        }
        FixtureOutcome::MissingExpected { actual } => {
            writeln!(out, "{}", painter.paint(ansi::RED, "❌ No expected output registered"))?;
            let actual_label = format!("Got ({} chars):", actual.chars().count());
            writeln!(out, "{}", painter.paint(ansi::YELLOW, &actual_label))?;
            writeln!(out, "{}", visualize_whitespace(actual))?;
        }
        FixtureOutcome::RuntimeError(message) => {
            writeln!(out, "{} {message}", painter.paint(ansi::RED, "❌ Runtime error:"))?;
        }
        FixtureOutcome::CompileError(message) => {
            writeln!(out, "{} {message}", painter.paint(ansi::RED, "❌ Compilation error:"))?;
        }
    }

    writeln!(out)
}

pub fn write_summary(out: &mut impl Write, summary: &Summary, painter: Painter) -> io::Result<()> {
    writeln!(out, "{}", painter.paint(ansi::BOLD, "Test Summary:"))?;
    writeln!(out, "{}", painter.paint(ansi::GREEN, &format!("✅ Passed: {}", summary.passed)))?;
    writeln!(out, "{}", painter.paint(ansi::RED, &format!("❌ Failed: {}", summary.failed())))?;
    writeln!(out, "{}", painter.paint(ansi::BLUE, &format!("📊 Total: {}", summary.total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render(report: &FixtureReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report, Painter::new(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_visualize_whitespace() {
        assert_eq!(visualize_whitespace("i = 0\n"), "i·=·0↵·");
        assert_eq!(visualize_whitespace("a\tb"), "a·b");
        assert_eq!(visualize_whitespace(""), "");
    }

    #[test]
    fn test_char_codes() {
        assert_eq!(char_codes("A\n"), vec![65, 10]);
    }

    #[test]
    fn test_passed_report() {
        let text = render(&FixtureReport {
            name: "hello.c".into(),
            generated: Some(PathBuf::from("output/hello.js")),
            outcome: FixtureOutcome::Passed,
        });
        assert_eq!(text, "Testing hello.c:\n⚙ Compiled hello.c\n✅ Output matches expected\n\n");
    }

    #[test]
    fn test_mismatch_report() {
        let text = render(&FixtureReport {
            name: "a.c".into(),
            generated: Some(PathBuf::from("output/a.js")),
            outcome: FixtureOutcome::Mismatch {
                expected: "x\n".into(),
                actual: "x".into(),
            },
        });
        assert!(text.contains("❌ Output mismatch"));
        assert!(text.contains("Expected (2 chars):\nx↵·\n"));
        assert!(text.contains("Got (1 chars):\nx\n"));
        assert!(text.contains("Expected: [120, 10]"));
        assert!(text.contains("Got:      [120]"));
    }

    #[test]
    fn test_compile_error_has_no_compiled_line() {
        let text = render(&FixtureReport {
            name: "gone.c".into(),
            generated: None,
            outcome: FixtureOutcome::CompileError("reading 'gone.c': denied".into()),
        });
        assert!(!text.contains("Compiled"));
        assert!(text.contains("❌ Compilation error: reading 'gone.c': denied"));
    }

    #[test]
    fn test_summary() {
        let mut buf = Vec::new();
        let summary = Summary { passed: 5, total: 7 };
        write_summary(&mut buf, &summary, Painter::new(false)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Test Summary:\n✅ Passed: 5\n❌ Failed: 2\n📊 Total: 7\n");
    }

    #[test]
    fn test_colors_applied() {
        let mut buf = Vec::new();
        write_banner(&mut buf, Painter::new(true)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(ansi::BOLD));
        assert!(text.contains(ansi::RESET));
    }
}

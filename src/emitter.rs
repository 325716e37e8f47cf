//! Output emitter
//!
//! Collects translated lines, each prefixed by its rendered indentation, and
//! produces the final program text. If no line invoked the entry point, one
//! invocation is appended after a blank separator line.

use tracing::debug;

use crate::lowering::IndentTracker;
use crate::patterns::ENTRY_INVOCATION_RE;

/// Statement appended when the program never calls its entry point
pub const ENTRY_INVOCATION: &str = "main();";

#[derive(Debug, Clone)]
pub struct Emitter {
    indent_width: usize,
    lines: Vec<String>,
    saw_entry_invocation: bool,
}

impl Emitter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_width,
            lines: Vec::new(),
            saw_entry_invocation: false,
        }
    }

    /// Append one line rendered at `depth`
    pub fn emit(&mut self, depth: IndentTracker, text: &str) {
        if ENTRY_INVOCATION_RE.is_match(text) {
            self.saw_entry_invocation = true;
        }
        self.lines.push(format!("{}{}", depth.prefix(self.indent_width), text));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn saw_entry_invocation(&self) -> bool {
        self.saw_entry_invocation
    }

    /// Assemble the program text, newline-terminating every line.
    pub fn finish(self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }

        if !self.saw_entry_invocation {
            debug!(lines = self.lines.len(), "appending entry point invocation");
            out.push('\n');
            out.push_str(ENTRY_INVOCATION);
            out.push('\n');
        }

        out
    }
}

/// Append the entry invocation to already-assembled text unless it has one.
///
/// Running it twice leaves the text unchanged the second time.
pub fn ensure_entry_invocation(text: &str) -> String {
    if ENTRY_INVOCATION_RE.is_match(text) {
        return text.to_string();
    }
    let mut out = text.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(ENTRY_INVOCATION);
    out.push('\n');
    out
}

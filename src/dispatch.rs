//! Pattern Dispatcher
//!
//! The recognizers live in [`RULES`], a static table evaluated top to
//! bottom. The first rule whose predicate accepts the line runs its handler
//! and nothing else looks at that line. The last rule accepts everything, so
//! every line is claimed by exactly one rule.
//!
//! [`translate_line`] is a pure step: it takes a line and the depth before
//! it and returns the emitted text with the depth after it.

use std::fmt;

use tracing::trace;

use crate::lowering::IndentTracker;
use crate::translate::{self, Emission};

/// Syntactic form a line was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    EntryPoint,
    FunctionSignature,
    BlockOpen,
    DeclarationWithInit,
    Declaration,
    FormattedPrint,
    BlockClose,
    Statement,
    LoopHeader,
    Passthrough,
}

/// A recognizer paired with the handler it selects
#[derive(Clone, Copy)]
pub struct PatternRule {
    pub kind: LineKind,
    pub matches: fn(&str) -> bool,
    pub translate: fn(&str) -> Emission,
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// All rules in priority order
pub static RULES: [PatternRule; 10] = [
    PatternRule {
        kind: LineKind::EntryPoint,
        matches: translate::is_entry_point_signature,
        translate: translate::process_entry_point,
    },
    PatternRule {
        kind: LineKind::FunctionSignature,
        matches: translate::is_function_signature,
        translate: translate::process_function_signature,
    },
    PatternRule {
        kind: LineKind::BlockOpen,
        matches: translate::is_block_open,
        translate: translate::process_block_open,
    },
    PatternRule {
        kind: LineKind::DeclarationWithInit,
        matches: translate::is_declaration_with_init,
        translate: translate::process_declaration_with_init,
    },
    PatternRule {
        kind: LineKind::Declaration,
        matches: translate::is_declaration,
        translate: translate::process_declaration,
    },
    PatternRule {
        kind: LineKind::FormattedPrint,
        matches: translate::is_formatted_print,
        translate: translate::process_formatted_print,
    },
    PatternRule {
        kind: LineKind::BlockClose,
        matches: translate::is_block_close,
        translate: translate::process_block_close,
    },
    PatternRule {
        kind: LineKind::Statement,
        matches: translate::is_terminated_statement,
        translate: translate::process_terminated_statement,
    },
    PatternRule {
        kind: LineKind::LoopHeader,
        matches: translate::is_typed_loop_header,
        translate: translate::process_typed_loop_header,
    },
    PatternRule {
        kind: LineKind::Passthrough,
        matches: translate::is_passthrough,
        translate: translate::process_passthrough,
    },
];

/// Output of one dispatched line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStep {
    pub kind: LineKind,
    /// Emitted text without indentation
    pub text: String,
    /// Depth the text is rendered at
    pub render_depth: IndentTracker,
    /// Depth the next line starts from
    pub next_depth: IndentTracker,
}

/// First rule accepting a trimmed line
pub fn select_rule(trimmed: &str) -> &'static PatternRule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(trimmed))
        .unwrap_or(&RULES[RULES.len() - 1])
}

pub fn classify(trimmed: &str) -> LineKind {
    select_rule(trimmed).kind
}

/// Translate one normalized line starting from `depth`
pub fn translate_line(trimmed: &str, depth: IndentTracker) -> LineStep {
    let rule = select_rule(trimmed);
    let emission = (rule.translate)(trimmed);
    let (render_depth, next_depth) = depth.apply(emission.change);

    trace!(
        kind = ?rule.kind,
        depth = render_depth.depth(),
        line = trimmed,
        "matched rule"
    );

    LineStep {
        kind: rule.kind,
        text: emission.text,
        render_depth,
        next_depth,
    }
}

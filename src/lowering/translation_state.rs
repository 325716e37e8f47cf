//! Translation State Management
//!
//! Contains the `TranslationState` struct which holds all mutable state of
//! one translation pass. It is created per call and consumed by `finish`,
//! so nothing survives between translations.

use crate::config::Options;
use crate::dispatch::LineStep;
use crate::emitter::Emitter;
use crate::lowering::IndentTracker;

/// State container for a single translation pass
#[derive(Debug, Clone)]
pub struct TranslationState {
    depth: IndentTracker,
    emitter: Emitter,
}

impl TranslationState {
    pub fn new(options: &Options) -> Self {
        Self {
            depth: IndentTracker::new(),
            emitter: Emitter::new(options.indent_width),
        }
    }

    /// Depth the next line starts from
    pub fn depth(&self) -> IndentTracker {
        self.depth
    }

    /// Record the output of one dispatched line
    pub fn apply(&mut self, step: LineStep) {
        self.emitter.emit(step.render_depth, &step.text);
        self.depth = step.next_depth;
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Consume the state and produce the program text
    pub fn finish(self) -> String {
        self.emitter.finish()
    }
}

impl Default for TranslationState {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::translate_line;

    #[test]
    fn test_apply_threads_depth() {
        let mut state = TranslationState::default();
        state.apply(translate_line("int main() {", state.depth()));
        assert_eq!(state.depth().depth(), 1);
        state.apply(translate_line("}", state.depth()));
        assert_eq!(state.depth().depth(), 0);
        assert_eq!(state.emitter().lines(), ["function main() {", "}"]);
    }

    #[test]
    fn test_fresh_state_per_pass() {
        let state = TranslationState::default();
        assert_eq!(state.depth(), IndentTracker::new());
        assert!(state.emitter().lines().is_empty());
    }
}

//! c2js - a line-oriented translator from a small C subset to JavaScript
//!
//! ## Translation Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  for each source line, in order, once:                              │
//! │    Normalizer  → trim; drop blank lines and #include directives     │
//! │    Dispatcher  → first matching rule of the ordered RULES table     │
//! │    Translator  → rewrite the construct, report its depth change     │
//! │    Indent      → Open: emit then deepen / Close: shallow then emit  │
//! │    Emitter     → append the indented line                           │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  finally: append `main();` unless the output already calls it       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pass is a best-effort recognizer, not a compiler: a line no rule
//! rewrites is copied through unchanged, and nothing is ever rejected.

// Core modules
pub mod config;
pub mod dispatch;
pub mod emitter;
pub mod error;
pub mod helpers;
pub mod normalizer;
pub mod patterns;

// Translation components
pub mod lowering;
pub mod translate;

// Fixture harness
pub mod harness;

pub use config::{HarnessConfig, Options};
pub use dispatch::{classify, translate_line, LineKind, LineStep, PatternRule, RULES};
pub use error::{Error, Result};
pub use lowering::{IndentTracker, TranslationState};

use tracing::debug;

use normalizer::source_lines;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` wins when set; otherwise `c2js=warn`, or `c2js=debug` when
/// `verbose` is on.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "c2js=debug" } else { "c2js=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

//===========================================================================
// MAIN TRANSLATOR
//===========================================================================

/// Translate C source text to JavaScript with default options
pub fn compile_c_to_js(source: &str) -> String {
    compile_with_options(source, &Options::default())
}

/// Translate C source text to JavaScript.
///
/// Pure and deterministic: all state lives in a [`TranslationState`]
/// created here and consumed before returning.
pub fn compile_with_options(source: &str, options: &Options) -> String {
    let mut state = TranslationState::new(options);

    for line in source_lines(source) {
        let step = translate_line(line.trimmed, state.depth());
        state.apply(step);
    }

    debug!(
        lines = state.emitter().lines().len(),
        final_depth = state.depth().depth(),
        "translation finished"
    );

    state.finish()
}

#[cfg(test)]
mod tests;

//! Translation Module
//!
//! Contains one module per recognized construct. Each module exposes a
//! predicate (`is_*`) that recognizes the construct on a trimmed line and a
//! handler (`process_*`) that rewrites it into an [`Emission`].

use crate::lowering::DepthChange;

// Signatures
pub mod function_def_translate;

// Structural braces
pub mod brace_translate;

// Declarations
pub mod declaration_translate;

// Formatted output
pub mod printf_translate;

// Loops
pub mod loop_header_translate;

// Statements and passthrough
pub mod statement_translate;

// Re-exports for convenience
pub use brace_translate::{is_block_close, is_block_open, process_block_close, process_block_open};
pub use declaration_translate::{
    is_declaration, is_declaration_with_init, process_declaration, process_declaration_with_init,
};
pub use function_def_translate::{
    is_entry_point_signature, is_function_signature, process_entry_point,
    process_function_signature,
};
pub use loop_header_translate::{is_typed_loop_header, process_typed_loop_header};
pub use printf_translate::{is_formatted_print, process_formatted_print, FormatSpec};
pub use statement_translate::{
    is_passthrough, is_terminated_statement, process_passthrough, process_terminated_statement,
};

/// One translated line before indentation is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub text: String,
    pub change: DepthChange,
}

impl Emission {
    pub fn keep(text: impl Into<String>) -> Self {
        Self { text: text.into(), change: DepthChange::Keep }
    }

    pub fn open(text: impl Into<String>) -> Self {
        Self { text: text.into(), change: DepthChange::Open }
    }

    pub fn close(text: impl Into<String>) -> Self {
        Self { text: text.into(), change: DepthChange::Close }
    }
}

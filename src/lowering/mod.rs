//! Lowering Module
//!
//! State carried across lines during a translation pass: the indent
//! tracker and the per-pass translation state that owns the emitter.

// State management
pub mod translation_state;

// Depth tracking
pub mod depth_tracking_lowering;

// Re-exports for convenience
pub use depth_tracking_lowering::{DepthChange, IndentTracker};
pub use translation_state::TranslationState;

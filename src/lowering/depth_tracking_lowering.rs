//! Depth Tracking Lowering
//!
//! The indent tracker: a single non-negative block depth that drives the
//! indentation prefix of every emitted line. Only structural braces move
//! it; control-flow lines that carry their own brace never do.

/// How a translated line moves the block depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthChange {
    /// Depth stays as it is
    Keep,
    /// Emit at the current depth, then go one level deeper
    Open,
    /// Go one level shallower (floored at zero), then emit at the new depth
    Close,
}

/// Current block depth.
///
/// A plain `Copy` value so each per-line step takes it by value and hands
/// back the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndentTracker {
    depth: usize,
}

impl IndentTracker {
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    pub const fn at(depth: usize) -> Self {
        Self { depth }
    }

    pub const fn depth(self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn open(self) -> Self {
        Self { depth: self.depth + 1 }
    }

    /// Close one level. Closing at depth zero stays at zero.
    #[must_use]
    pub const fn close(self) -> Self {
        Self { depth: self.depth.saturating_sub(1) }
    }

    /// Apply a change and return `(render_depth, next_depth)`.
    ///
    /// The render depth of a close is the depth after closing, so a closing
    /// brace lines up with the line that opened its block.
    pub const fn apply(self, change: DepthChange) -> (Self, Self) {
        match change {
            DepthChange::Keep => (self, self),
            DepthChange::Open => (self, self.open()),
            DepthChange::Close => {
                let closed = self.close();
                (closed, closed)
            }
        }
    }

    /// Render the depth as a prefix of `width` spaces per level
    pub fn prefix(self, width: usize) -> String {
        " ".repeat(self.depth * width)
    }
}

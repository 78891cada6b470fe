//! The parse-tree capability consumed by the matcher, plus output types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Byte range of one parse-tree node in its source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One highlight to apply: the triggering node's own span paired with the
/// label discovered on the longest matching ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightInstruction {
    pub span: Span,
    pub label: CompactString,
}

/// Read-only view of one concrete syntax tree node.
///
/// The engine has no dependency on which parser produced the tree; any
/// structure exposing this capability can be highlighted. The matcher
/// only reads through it, never mutates.
pub trait SyntaxNode: Clone {
    /// The parser's node-type name.
    fn kind(&self) -> &str;

    /// The role this node plays under its parent, when the grammar names one.
    fn field(&self) -> Option<&str>;

    /// Absent for the tree root.
    fn parent(&self) -> Option<Self>;

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<Self>;

    fn span(&self) -> Span;
}

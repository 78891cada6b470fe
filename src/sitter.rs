//! Adapter exposing `tree_sitter` nodes through the `SyntaxNode` trait.

use tree_sitter::{Node, Tree};

use crate::match_tree::MatchTree;
use crate::matcher;
use crate::node::{HighlightInstruction, Span, SyntaxNode};

/// A `tree_sitter::Node` viewed through the engine's capability trait.
#[derive(Debug, Clone, Copy)]
pub struct SitterNode<'t> {
    node: Node<'t>,
}

impl<'t> SitterNode<'t> {
    pub fn root(tree: &'t Tree) -> Self {
        Self {
            node: tree.root_node(),
        }
    }

    pub fn new(node: Node<'t>) -> Self {
        Self { node }
    }

    pub fn inner(&self) -> Node<'t> {
        self.node
    }
}

impl<'t> SyntaxNode for SitterNode<'t> {
    fn kind(&self) -> &str {
        self.node.kind()
    }

    // tree-sitter exposes field names on cursors, not nodes, so recover
    // this node's role by scanning the parent's children.
    fn field(&self) -> Option<&str> {
        let parent = self.node.parent()?;
        let mut cursor = parent.walk();
        if !cursor.goto_first_child() {
            return None;
        }
        loop {
            if cursor.node() == self.node {
                return cursor.field_name();
            }
            if !cursor.goto_next_sibling() {
                return None;
            }
        }
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent().map(Self::new)
    }

    fn child_count(&self) -> usize {
        self.node.child_count()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.node.child(index).map(Self::new)
    }

    fn span(&self) -> Span {
        Span::new(self.node.start_byte(), self.node.end_byte())
    }
}

/// Highlights a whole tree-sitter parse tree against a compiled match tree.
pub fn highlight_tree(tree: &Tree, match_tree: &MatchTree) -> Vec<HighlightInstruction> {
    matcher::highlight(&SitterNode::root(tree), match_tree)
}

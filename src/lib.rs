//! treetint - tree-shape rule matching for syntax highlighting
//!
//! Module structure:
//! - descriptor: node descriptors and the choice keys derived from them
//! - rule: ancestor-chain rules (outermost first, label last)
//! - match_tree: the compiled trie and its builder
//! - matcher: pre-order walk emitting highlight instructions
//! - node: the parse-tree capability trait plus span/output types
//! - engine: rebuild-and-swap ownership of the active match tree
//! - presets: built-in rule tables (Python)
//! - sitter: tree-sitter adapter (feature `sitter`)

pub mod descriptor;
pub mod engine;
pub mod match_tree;
pub mod matcher;
pub mod node;
pub mod presets;
pub mod rule;
#[cfg(feature = "sitter")]
pub mod sitter;

pub use descriptor::{ChoiceKey, Descriptor};
pub use engine::HighlightEngine;
pub use match_tree::{BuildError, MatchNode, MatchTree};
pub use matcher::highlight;
pub use node::{HighlightInstruction, Span, SyntaxNode};
pub use rule::Rule;

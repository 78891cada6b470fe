//! Rebuild-and-swap ownership of the active match tree.

use std::sync::Arc;

use crate::match_tree::{BuildError, MatchTree};
use crate::matcher;
use crate::node::{HighlightInstruction, SyntaxNode};
use crate::rule::Rule;

/// Owns the match tree currently in effect. Reconfiguration compiles a
/// whole replacement tree and swaps the reference; a rebuild that fails
/// leaves the previous tree untouched, so a broken rule batch never
/// degrades highlighting that already works.
#[derive(Debug, Clone)]
pub struct HighlightEngine {
    active: Arc<MatchTree>,
}

impl HighlightEngine {
    pub fn new(rules: &[Rule]) -> Result<Self, BuildError> {
        Ok(Self {
            active: Arc::new(MatchTree::build(rules)?),
        })
    }

    /// Compiles `rules` and swaps the result in. On failure the
    /// previously active tree stays in effect and the error is returned.
    pub fn reload(&mut self, rules: &[Rule]) -> Result<(), BuildError> {
        match MatchTree::build(rules) {
            Ok(tree) => {
                self.active = Arc::new(tree);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "rule rebuild rejected, keeping active match tree");
                Err(error)
            }
        }
    }

    /// The active tree, shareable read-only across concurrent matcher
    /// runs (e.g. one per open document). A run holding this `Arc` keeps
    /// seeing a fully formed tree across any later `reload`.
    pub fn match_tree(&self) -> Arc<MatchTree> {
        Arc::clone(&self.active)
    }

    pub fn highlight<N: SyntaxNode>(&self, root: &N) -> Vec<HighlightInstruction> {
        matcher::highlight(root, &self.active)
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;

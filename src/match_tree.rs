//! The compiled match tree and its builder.
//!
//! Rules are inserted innermost-descriptor-first, so the root's choice
//! mapping is keyed by the node kinds that can trigger a match and deeper
//! trie levels correspond to ancestors discovered while climbing the
//! parse tree. The tree is immutable once built; reconfiguration builds a
//! replacement and swaps it in (see `engine`).

use std::fmt;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::descriptor::ChoiceKey;
use crate::rule::Rule;

#[derive(Debug)]
pub enum BuildError {
    /// A rule with an empty descriptor chain; `index` is its position in
    /// the input batch.
    EmptyRule { index: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyRule { index } => {
                write!(f, "rule {index} has an empty descriptor chain")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// One trie node: an optional label, set when some rule terminates
/// exactly here, and the choice mapping consulted while climbing toward
/// the parse-tree root.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MatchNode {
    label: Option<CompactString>,
    repeat: bool,
    choices: FxHashMap<ChoiceKey, MatchNode>,
}

impl MatchNode {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True when the key that reaches this node may be consumed by a run
    /// of consecutive ancestors rather than exactly one.
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn get(&self, key: &ChoiceKey) -> Option<&MatchNode> {
        self.choices.get(key)
    }

    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    fn count_nodes(&self) -> usize {
        1 + self.choices.values().map(MatchNode::count_nodes).sum::<usize>()
    }

    fn dump_into(&self, depth: usize, out: &mut String) {
        let mut entries: Vec<_> = self.choices.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (key, child) in entries {
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(&key.to_string());
            if child.repeat {
                out.push('+');
            }
            if let Some(label) = child.label() {
                out.push_str(" -> ");
                out.push_str(label);
            }
            out.push('\n');
            child.dump_into(depth + 1, out);
        }
    }
}

/// The compiled lookup structure consumed by the matcher. Safe to share
/// read-only across concurrent matcher runs once built.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchTree {
    root: MatchNode,
    rule_count: usize,
    node_count: usize,
}

impl MatchTree {
    /// Compiles a batch of rules. Each chain is walked innermost-first
    /// from the root, creating nodes as needed; the label lands on the
    /// node reached by the outermost ancestor. Two rules sharing a full
    /// reversed path resolve by last-write-wins, which is the override
    /// mechanism rule loaders rely on. A batch containing an empty rule
    /// produces no tree at all.
    pub fn build(rules: &[Rule]) -> Result<Self, BuildError> {
        if let Some(index) = rules.iter().position(|rule| rule.chain.is_empty()) {
            return Err(BuildError::EmptyRule { index });
        }

        let mut root = MatchNode::default();
        for rule in rules {
            let mut node = &mut root;
            for descriptor in rule.chain.iter().rev() {
                node = node.choices.entry(descriptor.key()).or_default();
                if descriptor.repeat {
                    node.repeat = true;
                }
            }
            node.label = Some(rule.label.clone());
        }

        let node_count = root.count_nodes();
        tracing::debug!(
            rules = rules.len(),
            nodes = node_count,
            "match tree built"
        );
        Ok(Self {
            root,
            rule_count: rules.len(),
            node_count,
        })
    }

    pub fn root(&self) -> &MatchNode {
        &self.root
    }

    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Total match nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Indented diagnostic rendering of the trie, keys sorted.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.root.dump_into(0, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/match_tree.rs"]
mod tests;

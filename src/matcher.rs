//! Pre-order walk of a parse tree against a compiled match tree.

use compact_str::CompactString;

use crate::descriptor::ChoiceKey;
use crate::match_tree::{MatchNode, MatchTree};
use crate::node::{HighlightInstruction, SyntaxNode};

/// Walks the whole parse tree in pre-order, visiting every node exactly
/// once, and emits one instruction per node whose ancestor chain reaches
/// a labeled match-tree node. Descends into children whether or not the
/// node itself matched. Pure: identical inputs yield identical output,
/// in tree pre-order.
pub fn highlight<N: SyntaxNode>(root: &N, tree: &MatchTree) -> Vec<HighlightInstruction> {
    let mut instructions = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let Some(label) = resolve_label(&node, tree.root()) {
            instructions.push(HighlightInstruction {
                span: node.span(),
                label,
            });
        }

        for index in (0..node.child_count()).rev() {
            if let Some(child) = node.child(index) {
                stack.push(child);
            }
        }
    }

    instructions
}

/// Resolves the label for one candidate node by entering the match tree
/// at the node's own key and climbing the parse tree's parent links.
///
/// Every labeled node reached during the ascent overwrites `best`, so the
/// longest chain wins without any depth bookkeeping. The emitted span is
/// always the candidate's own; the ascent only decides the label.
fn resolve_label<N: SyntaxNode>(node: &N, root: &MatchNode) -> Option<CompactString> {
    let (qualified, bare) = keys_for(node);
    let (mut current, mut entered) = step(root, qualified.as_ref(), &bare)?;
    let mut best = current.label().map(CompactString::from);

    let mut cursor = node.parent();
    while let Some(ancestor) = cursor {
        let (qualified, bare) = keys_for(&ancestor);
        match step(current, qualified.as_ref(), &bare) {
            Some((next, key)) => {
                current = next;
                entered = key;
            }
            // A repeated key soaks up further ancestors carrying it.
            None if current.repeat()
                && (qualified.as_ref() == Some(&entered) || bare == entered) => {}
            None => break,
        }
        if let Some(label) = current.label() {
            best = Some(CompactString::from(label));
        }
        cursor = ancestor.parent();
    }

    best
}

fn keys_for<N: SyntaxNode>(node: &N) -> (Option<ChoiceKey>, ChoiceKey) {
    let qualified = node
        .field()
        .map(|field| ChoiceKey::fielded(field, node.kind()));
    (qualified, ChoiceKey::named(node.kind()))
}

/// Single lookup step with the field-qualified key strictly preferred
/// over the bare one; only one of the two is ever followed. Returns the
/// matched child and the key that reached it.
fn step<'t>(
    from: &'t MatchNode,
    qualified: Option<&ChoiceKey>,
    bare: &ChoiceKey,
) -> Option<(&'t MatchNode, ChoiceKey)> {
    if let Some(key) = qualified {
        if let Some(child) = from.get(key) {
            return Some((child, key.clone()));
        }
    }
    from.get(bare).map(|child| (child, bare.clone()))
}

#[cfg(test)]
#[path = "../tests/unit/matcher.rs"]
mod tests;

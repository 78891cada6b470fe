//! Ancestor-chain highlight rules.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;

/// One highlight rule: a descriptor chain with the outermost ancestor
/// first and the match-triggering descriptor last, plus the label applied
/// when the chain matches. A chain must hold at least one descriptor;
/// the builder rejects empty chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub chain: Vec<Descriptor>,
    pub label: CompactString,
}

impl Rule {
    pub fn new(chain: Vec<Descriptor>, label: &str) -> Self {
        Self {
            chain,
            label: CompactString::from(label),
        }
    }

    /// Parses the compact dotted notation used by in-code rule tables:
    /// `class_definition.name:identifier`, `call.attribute+.identifier`.
    /// A `field:name` component qualifies the descriptor, a trailing `+`
    /// marks it repeatable.
    pub fn from_dotted(path: &str, label: &str) -> Self {
        Self {
            chain: path.split('.').map(parse_component).collect(),
            label: CompactString::from(label),
        }
    }
}

fn parse_component(raw: &str) -> Descriptor {
    let (raw, repeat) = match raw.strip_suffix('+') {
        Some(stripped) => (stripped, true),
        None => (raw, false),
    };
    let mut descriptor = match raw.split_once(':') {
        Some((field, name)) => Descriptor::fielded(field, name),
        None => Descriptor::named(raw),
    };
    descriptor.repeat = repeat;
    descriptor
}

#[cfg(test)]
#[path = "../tests/unit/rule.rs"]
mod tests;

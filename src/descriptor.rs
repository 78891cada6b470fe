//! Node descriptors and the choice keys derived from them.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one syntax-tree node shape: the parser's node-type name plus
/// an optional field naming the role the node plays under its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<CompactString>,
    /// A repeated descriptor is consumed by a run of one or more
    /// consecutive ancestors carrying the same key (`attribute+`).
    #[serde(default)]
    pub repeat: bool,
}

impl Descriptor {
    pub fn named(name: &str) -> Self {
        Self {
            name: CompactString::from(name),
            field: None,
            repeat: false,
        }
    }

    pub fn fielded(field: &str, name: &str) -> Self {
        Self {
            name: CompactString::from(name),
            field: Some(CompactString::from(field)),
            repeat: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// The key this descriptor occupies in a match node's choice mapping.
    pub fn key(&self) -> ChoiceKey {
        ChoiceKey {
            field: self.field.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{field}:{}", self.name)?;
        } else {
            write!(f, "{}", self.name)?;
        }
        if self.repeat {
            write!(f, "+")?;
        }
        Ok(())
    }
}

/// Lookup key for a match node's choice mapping.
///
/// A fielded key never compares equal to a bare one: `name:identifier`
/// and `identifier` index distinct children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceKey {
    pub field: Option<CompactString>,
    pub name: CompactString,
}

impl ChoiceKey {
    pub fn named(name: &str) -> Self {
        Self {
            field: None,
            name: CompactString::from(name),
        }
    }

    pub fn fielded(field: &str, name: &str) -> Self {
        Self {
            field: Some(CompactString::from(field)),
            name: CompactString::from(name),
        }
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}:{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/descriptor.rs"]
mod tests;

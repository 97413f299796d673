use super::NodeId;
use crate::String;
use hashbrown::{DefaultHashBuilder, HashMap};
use indexmap::IndexMap;

/// Which auxiliary index a child belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Partition {
    Literal,
    Argument,
    Unindexed,
}

/// Child collection of a command node.
///
/// `all` is authoritative and keeps insertion order. `literals` and
/// `arguments` partition it by kind; opaque children live only in `all`.
/// The collections are private so that [`CommandTree`](crate::CommandTree)
/// insertion and removal are the only code paths that touch them, which
/// keeps the partition consistent.
#[derive(Debug, Clone, Default)]
pub struct Children {
    all: IndexMap<String, NodeId, DefaultHashBuilder>,
    literals: HashMap<String, NodeId>,
    arguments: HashMap<String, NodeId>,
}

impl Children {
    /// Look up a child by name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.all.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.all.contains_key(name)
    }

    /// Children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.all.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        self.all.values().copied()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Look up a child in the literal index.
    pub fn literal(&self, name: &str) -> Option<NodeId> {
        self.literals.get(name).copied()
    }

    /// Look up a child in the argument index.
    pub fn argument(&self, name: &str) -> Option<NodeId> {
        self.arguments.get(name).copied()
    }

    /// Literal children, in no particular order.
    pub fn literals(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.literals.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Argument children, in no particular order.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.arguments.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub(crate) fn insert(&mut self, name: &str, id: NodeId, partition: Partition) {
        self.all.insert(String::from(name), id);
        match partition {
            Partition::Literal => {
                self.literals.insert(String::from(name), id);
            }
            Partition::Argument => {
                self.arguments.insert(String::from(name), id);
            }
            Partition::Unindexed => {}
        }
    }

    /// Remove `name` from the primary map and, only if it was there, from the
    /// index matching the child's partition.
    pub(crate) fn remove(&mut self, name: &str, partition: Partition) -> Option<NodeId> {
        let id = self.all.shift_remove(name)?;
        match partition {
            Partition::Literal => {
                self.literals.remove(name);
            }
            Partition::Argument => {
                self.arguments.remove(name);
            }
            Partition::Unindexed => {}
        }
        Some(id)
    }
}

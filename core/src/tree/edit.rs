//! Structural edits on an existing tree: aliasing and coordinated removal.

use super::CommandTree;
use crate::node::{CommandNode, NodeId, NodeKind};
use crate::{Domain, Error, String};

impl<D: Domain> CommandTree<D> {
    /// Clone `node` under `name`, sharing its children.
    ///
    /// The clone keeps the original's kind, payload, redirect and
    /// requirement, and points at the *same* child ids, so edits below one
    /// are visible through the other. The clone is stored detached;
    /// registering it under a parent is up to the caller.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedNodeKind`] for root and opaque nodes.
    pub fn alias(&mut self, node: NodeId, name: impl Into<String>) -> Result<NodeId, Error> {
        let original = &self[node];
        match original.kind {
            NodeKind::Literal | NodeKind::Argument { .. } => {}
            NodeKind::Root | NodeKind::Other { .. } => {
                return Err(Error::unsupported(original.name(), original.kind()));
            }
        }

        let clone = CommandNode {
            name: name.into(),
            kind: original.kind.clone(),
            children: original.children.clone(),
            redirect: original.redirect,
            requirement: original.requirement.clone(),
        };
        let id = self.add_node(clone);
        tracing::trace!(original = %node, alias = %id, "aliased node");
        Ok(id)
    }

    /// Detach the child `name` from `parent`.
    ///
    /// The child is removed from the parent's primary collection and, only
    /// if it was there, from the literal or argument index matching its
    /// kind. Returns the detached id, or `None` if `parent` had no such child.
    pub fn remove_child(&mut self, parent: NodeId, name: &str) -> Option<NodeId> {
        let child = self[parent].children.get(name)?;
        let partition = self[child].kind.partition();
        let removed = self.nodes[parent.index()]
            .children
            .remove(name, partition);
        tracing::trace!(parent = %parent, name, "removed child");
        removed
    }

    /// Detach every named child from `parent`.
    ///
    /// Returns `true` only if every name was present. Missing names are not
    /// an error and do not stop the remaining removals.
    pub fn remove_children<I>(&mut self, parent: NodeId, names: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut all_present = true;
        for name in names {
            all_present &= self.remove_child(parent, name.as_ref()).is_some();
        }
        all_present
    }
}

//! Arena-backed command tree.
//!
//! A [`CommandTree`] owns all of its nodes in a flat `Vec` and hands out
//! [`NodeId`]s. Children and redirects are ids into the same arena, so shared
//! subtrees and redirect cycles need no reference counting.
//!
//! Nodes are never freed: removing a child only detaches it from its parent,
//! and the id stays valid for any other parent (or alias) still pointing at it.

mod display;
mod edit;


pub use display::TreeDisplay;

use crate::node::{CommandNode, NodeId, NodeKind, Partition};
use crate::{Domain, Error, Vec};
use alloc::collections::VecDeque;
use core::ops::Index;
use hashbrown::{HashMap, HashSet};

/// A command tree for domain `D`.
#[derive(Debug, Clone)]
pub struct CommandTree<D: Domain> {
    nodes: Vec<CommandNode<D>>,
    root: NodeId,
}

impl<D: Domain> Default for CommandTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Domain> CommandTree<D> {
    /// Create a tree holding only a fresh root.
    pub fn new() -> Self {
        Self::from_root(CommandNode::root())
    }

    /// Create a tree whose root is `root`, taken as-is.
    pub(crate) fn from_root(root: CommandNode<D>) -> Self {
        Self {
            nodes: alloc::vec![root],
            root: NodeId::from_index(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&CommandNode<D>> {
        self.nodes.get(id.index())
    }

    /// Mutable access to a node's own settings (redirect, requirement).
    ///
    /// Children can only be changed through the tree.
    ///
    /// # Panics
    ///
    /// If `id` was not issued by this tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut CommandNode<D> {
        &mut self.nodes[id.index()]
    }

    /// Ids of every node in the arena, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<D> {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    /// Store a detached node and return its id.
    ///
    /// # Panics
    ///
    /// If the arena already holds `u32::MAX` nodes.
    pub fn add_node(&mut self, node: CommandNode<D>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Register `child` under `parent`, keyed by the child's name.
    ///
    /// If `parent` already has a child with that name, the new node's
    /// children are merged into the existing child (recursively) and the
    /// existing id is returned. The new node itself stays detached.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedNodeKind`] if `child` is a root.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, Error> {
        let node = &self[child];
        if node.is_root() {
            return Err(Error::unsupported(node.name(), node.kind()));
        }

        let Some(existing) = self[parent].children.get(node.name()) else {
            let partition = node.kind.partition();
            let name = node.name.clone();
            self.nodes[parent.index()]
                .children
                .insert(&name, child, partition);
            return Ok(child);
        };

        if existing != child {
            let grandchildren: Vec<NodeId> = self[child].children.ids().collect();
            for grandchild in grandchildren {
                self.add_child(existing, grandchild)?;
            }
        }
        Ok(existing)
    }

    /// Store `node` and register it under `parent` in one step.
    ///
    /// # Panics
    ///
    /// Like [`CommandTree::add_node`], on arena overflow, and if `parent`
    /// is not an id of this tree.
    pub fn attach(&mut self, parent: NodeId, node: CommandNode<D>) -> Result<NodeId, Error> {
        let id = self.add_node(node);
        self.add_child(parent, id)
    }

    /// Register `child` under `name` without merging. The walker uses this
    /// to mirror the source tree's keys exactly; `child` may still be a
    /// reserved slot, so the partition comes from the source node.
    pub(crate) fn link_child(
        &mut self,
        parent: NodeId,
        name: &str,
        child: NodeId,
        partition: Partition,
    ) {
        self.nodes[parent.index()]
            .children
            .insert(name, child, partition);
    }

    /// Reserve a slot to be filled later with [`CommandTree::fill`].
    pub(crate) fn reserve(&mut self) -> NodeId {
        self.add_node(CommandNode::root())
    }

    pub(crate) fn fill(&mut self, slot: NodeId, node: CommandNode<D>) {
        self.nodes[slot.index()] = node;
    }

    /// Direct child of `parent` named `name`.
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self[parent].children.get(name)
    }

    /// Follow `path` from the root through children (not redirects).
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        path.iter()
            .try_fold(self.root, |node, name| self.child(node, name.as_ref()))
    }

    /// Shortest name path from the root to `target` through children.
    ///
    /// Returns an empty path for the root and `None` for unreachable nodes.
    pub fn path_of(&self, target: NodeId) -> Option<Vec<&str>> {
        let mut parents: HashMap<NodeId, (NodeId, &str)> = HashMap::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(self.root);
        queue.push_back(self.root);

        while let Some(node) = queue.pop_front() {
            if node == target {
                let mut path = Vec::new();
                let mut cursor = node;
                while let Some(&(parent, name)) = parents.get(&cursor) {
                    path.push(name);
                    cursor = parent;
                }
                path.reverse();
                return Some(path);
            }
            for (name, child) in self[node].children.iter() {
                if seen.insert(child) {
                    parents.insert(child, (node, name));
                    queue.push_back(child);
                }
            }
        }
        None
    }

    /// Kind of the node, as a shorthand for `tree[id].kind()`.
    pub fn kind(&self, id: NodeId) -> &NodeKind<D> {
        &self[id].kind
    }

    /// Indented outline of the tree, for logs and tests.
    pub fn display(&self) -> TreeDisplay<'_, D> {
        TreeDisplay::new(self)
    }
}

impl<D: Domain> Index<NodeId> for CommandTree<D> {
    type Output = CommandNode<D>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

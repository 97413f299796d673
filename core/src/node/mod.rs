//! Node model: ids, kinds and the command node itself.
//!
//! Nodes live in a [`CommandTree`](crate::CommandTree) arena and refer to
//! each other (children, redirects) by [`NodeId`]. Identity is the id, not
//! the node's structure: two identical literals stored twice are two nodes.

mod children;
mod requirement;

pub use children::Children;
pub(crate) use children::Partition;
pub use requirement::Requirement;

use crate::{Domain, String};
use core::fmt;

/// Stable index of a node inside one [`CommandTree`](crate::CommandTree).
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("command tree exceeded u32::MAX nodes"))
    }

    /// Position of the node in its tree's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind-specific part of a node.
///
/// The set of kinds is closed; `Other` stands for nodes a producer declared
/// with a kind this crate does not model. Strategies reject it.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<D: Domain> {
    /// Tree root. Has no name.
    Root,

    /// Fixed keyword matched by its name.
    Literal,

    /// Typed argument, optionally with its own suggestion source.
    Argument {
        ty: D::ArgumentType,
        suggestions: Option<D::Suggestions>,
    },

    /// Opaque node with the kind the producer declared for it.
    Other { declared: String },
}

impl<D: Domain> NodeKind<D> {
    /// Human-readable kind name, as carried by
    /// [`Error::UnsupportedNodeKind`](crate::Error::UnsupportedNodeKind).
    pub fn declared(&self) -> &str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Literal => "literal",
            NodeKind::Argument { .. } => "argument",
            NodeKind::Other { declared } => declared,
        }
    }

    pub(crate) fn partition(&self) -> Partition {
        match self {
            NodeKind::Literal => Partition::Literal,
            NodeKind::Argument { .. } => Partition::Argument,
            NodeKind::Root | NodeKind::Other { .. } => Partition::Unindexed,
        }
    }
}

/// A command node.
///
/// Children are only reachable through the owning tree; see
/// [`CommandTree::add_child`](crate::CommandTree::add_child) and
/// [`CommandTree::remove_child`](crate::CommandTree::remove_child).
pub struct CommandNode<D: Domain> {
    pub(crate) name: String,
    pub(crate) kind: NodeKind<D>,
    pub(crate) children: Children,
    pub(crate) redirect: Option<NodeId>,
    pub(crate) requirement: Option<Requirement<D::Context>>,
}

// Not derived: the context type needs neither `Clone` nor `Debug`.
impl<D: Domain> Clone for CommandNode<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind.clone(),
            children: self.children.clone(),
            redirect: self.redirect,
            requirement: self.requirement.clone(),
        }
    }
}

impl<D: Domain> fmt::Debug for CommandNode<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("children", &self.children)
            .field("redirect", &self.redirect)
            .field("requirement", &self.requirement)
            .finish()
    }
}

impl<D: Domain> CommandNode<D> {
    fn new(name: impl Into<String>, kind: NodeKind<D>) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Children::default(),
            redirect: None,
            requirement: None,
        }
    }

    pub fn root() -> Self {
        Self::new(String::new(), NodeKind::Root)
    }

    pub fn literal(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Literal)
    }

    pub fn argument(name: impl Into<String>, ty: D::ArgumentType) -> Self {
        Self::new(
            name,
            NodeKind::Argument {
                ty,
                suggestions: None,
            },
        )
    }

    /// An opaque node. Kept in trees so producers can hand over everything
    /// they have, but no strategy can map it.
    pub fn other(name: impl Into<String>, declared: impl Into<String>) -> Self {
        Self::new(
            name,
            NodeKind::Other {
                declared: declared.into(),
            },
        )
    }

    /// Set the custom suggestion source. No-op on non-argument nodes.
    pub fn with_suggestions(mut self, source: D::Suggestions) -> Self {
        if let NodeKind::Argument { suggestions, .. } = &mut self.kind {
            *suggestions = Some(source);
        }
        self
    }

    pub fn with_requirement(mut self, requirement: Requirement<D::Context>) -> Self {
        self.requirement = Some(requirement);
        self
    }

    /// Shorthand for `with_requirement(Requirement::new(predicate))`.
    pub fn requires(self, predicate: impl Fn(&D::Context) -> bool + Send + Sync + 'static) -> Self {
        self.with_requirement(Requirement::new(predicate))
    }

    pub fn with_redirect(mut self, target: NodeId) -> Self {
        self.redirect = Some(target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind<D> {
        &self.kind
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn redirect(&self) -> Option<NodeId> {
        self.redirect
    }

    pub fn requirement(&self) -> Option<&Requirement<D::Context>> {
        self.requirement.as_ref()
    }

    pub fn set_redirect(&mut self, target: Option<NodeId>) {
        self.redirect = target;
    }

    pub fn set_requirement(&mut self, requirement: Option<Requirement<D::Context>>) {
        self.requirement = requirement;
    }

    /// Whether `context` passes this node's requirement.
    pub fn can_use(&self, context: &D::Context) -> bool {
        self.requirement.as_ref().is_none_or(|req| req.test(context))
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::Root)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Literal)
    }

    pub fn is_argument(&self) -> bool {
        matches!(self.kind, NodeKind::Argument { .. })
    }

    /// Argument type descriptor, if this is an argument node.
    pub fn argument_type(&self) -> Option<&D::ArgumentType> {
        match &self.kind {
            NodeKind::Argument { ty, .. } => Some(ty),
            _ => None,
        }
    }

    /// Custom suggestion source, if this is an argument node that has one.
    pub fn suggestions(&self) -> Option<&D::Suggestions> {
        match &self.kind {
            NodeKind::Argument { suggestions, .. } => suggestions.as_ref(),
            _ => None,
        }
    }
}

//! Memoized tree walker: maps a whole source tree through a [`Mapper`].
//!
//! ## Algorithm
//!
//! The walk is depth-first from the source root:
//!
//! - A child whose requirement fails the context is pruned together with its
//!   subtree. Without a context nothing is pruned.
//! - Every source node is mapped at most once. The mapped-node table keys on
//!   the source [`NodeId`], so a node reachable from several parents (or as a
//!   redirect destination) becomes one shared target node.
//! - A redirecting node reserves its target slot and records it in the
//!   table *before* resolving its destination. A redirect cycle therefore
//!   comes back to the reserved slot instead of recursing forever. Its own
//!   children are not walked.
//! - Redirect destinations skip the visibility check by default, see
//!   [`RedirectTargets`].
//!
//! A strategy error aborts the walk; no partial tree is returned.
//!
//! ## Example
//!
//! ```
//! use cmdgraft_core::{CommandNode, CommandTree, Domain, StandardMapper, walker};
//!
//! #[derive(Debug, Clone)]
//! struct Perms;
//! impl Domain for Perms {
//!     type Context = bool;
//!     type ArgumentType = &'static str;
//!     type Suggestions = ();
//! }
//!
//! let mut tree = CommandTree::<Perms>::new();
//! let home = tree.attach(tree.root(), CommandNode::literal("home")).unwrap();
//! tree.attach(home, CommandNode::argument("name", "word").requires(|admin: &bool| *admin))
//!     .unwrap();
//!
//! let guest = walker::map_tree(&tree, &mut StandardMapper, Some(&false)).unwrap();
//! assert_eq!(guest.display().to_string(), "<root>\n  home\n");
//! ```


use crate::node::{CommandNode, NodeId};
use crate::{CommandTree, Domain, Error, Mapper, RedirectTargets, WalkOptions};
use core::marker::PhantomData;
use hashbrown::{HashMap, HashSet};

/// Map `source` into a new tree with default [`WalkOptions`].
///
/// With `context` set, nodes whose requirement fails for it are pruned.
///
/// # Errors
///
/// [`Error::UnsupportedNodeKind`] from the mapper aborts the whole walk.
pub fn map_tree<S, T, M>(
    source: &CommandTree<S>,
    mapper: &mut M,
    context: Option<&S::Context>,
) -> Result<CommandTree<T>, Error>
where
    S: Domain,
    T: Domain,
    M: Mapper<S, T> + ?Sized,
{
    TreeWalker::new(source, mapper).with_context(context).run()
}

/// Configurable form of [`map_tree`].
pub struct TreeWalker<'s, 'm, S: Domain, T: Domain, M: ?Sized> {
    source: &'s CommandTree<S>,
    mapper: &'m mut M,
    context: Option<&'s S::Context>,
    options: WalkOptions,
    _target: PhantomData<fn() -> T>,
}

impl<'s, 'm, S, T, M> TreeWalker<'s, 'm, S, T, M>
where
    S: Domain,
    T: Domain,
    M: Mapper<S, T> + ?Sized,
{
    pub fn new(source: &'s CommandTree<S>, mapper: &'m mut M) -> Self {
        Self {
            source,
            mapper,
            context: None,
            options: WalkOptions::default(),
            _target: PhantomData,
        }
    }

    /// Filter by requirements evaluated against `context` (`None` disables
    /// filtering).
    pub fn with_context(mut self, context: Option<&'s S::Context>) -> Self {
        self.context = context;
        self
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the walk. The mapped-node table lives only for this call.
    ///
    /// The source root is always kept and its children are always walked:
    /// a requirement on the root is copied but never checked, and a
    /// redirect on the root is ignored.
    pub fn run(self) -> Result<CommandTree<T>, Error> {
        let source = self.source;
        tracing::debug!(
            nodes = source.len(),
            filtered = self.context.is_some(),
            "mapping command tree"
        );

        let source_root = &source[source.root()];
        if source_root.redirect().is_some() {
            tracing::debug!("ignoring redirect on the source root");
        }
        let mut mapped_root = self.mapper.map_node(source_root)?;
        if let Some(requirement) = source_root.requirement() {
            mapped_root.set_requirement(self.mapper.map_requirement(requirement));
        }
        let target = CommandTree::from_root(mapped_root);

        let mut walk = Walk {
            source,
            mapper: self.mapper,
            context: self.context,
            options: self.options,
            mapped: HashMap::new(),
            visible: HashMap::new(),
            pruned: 0,
            target,
        };
        walk.mapped.insert(source.root(), walk.target.root());

        let target_root = walk.target.root();
        for (name, child) in source_root.children().iter() {
            if let Some(mapped) = walk.resolve_child(child)? {
                let partition = source[child].kind().partition();
                walk.target.link_child(target_root, name, mapped, partition);
            }
        }

        tracing::debug!(
            mapped = walk.mapped.len(),
            pruned = walk.pruned,
            "mapped command tree"
        );
        Ok(walk.target)
    }
}

/// State of one walk: the mapped-node table and the tree being built.
struct Walk<'s, 'm, S: Domain, T: Domain, M: ?Sized> {
    source: &'s CommandTree<S>,
    mapper: &'m mut M,
    context: Option<&'s S::Context>,
    options: WalkOptions,
    /// Source node -> target node. Entries for redirecting nodes may point
    /// at a reserved slot that is still being filled.
    mapped: HashMap<NodeId, NodeId>,
    /// Requirement results, so each predicate runs at most once.
    visible: HashMap<NodeId, bool>,
    pruned: usize,
    target: CommandTree<T>,
}

impl<S, T, M> Walk<'_, '_, S, T, M>
where
    S: Domain,
    T: Domain,
    M: Mapper<S, T> + ?Sized,
{
    fn is_visible(&mut self, id: NodeId) -> bool {
        let Some(context) = self.context else {
            return true;
        };
        let source = self.source;
        let node = &source[id];
        *self
            .visible
            .entry(id)
            .or_insert_with(|| node.can_use(context))
    }

    /// Map a child edge: prune on failed requirement, else resolve.
    fn resolve_child(&mut self, id: NodeId) -> Result<Option<NodeId>, Error> {
        if !self.is_visible(id) {
            self.pruned += 1;
            tracing::trace!(node = %id, "pruned by requirement");
            return Ok(None);
        }
        self.resolve(id)
    }

    /// Memoized resolve. Only returns `None` under
    /// [`RedirectTargets::RequireVisible`].
    fn resolve(&mut self, id: NodeId) -> Result<Option<NodeId>, Error> {
        if let Some(&mapped) = self.mapped.get(&id) {
            tracing::trace!(node = %id, mapped = %mapped, "reused mapped node");
            return Ok(Some(mapped));
        }

        let source = self.source;
        let node = &source[id];

        let Some(destination) = node.redirect() else {
            let mut mapped = self.mapper.map_node(node)?;
            self.copy_requirement(id, &mut mapped);
            let target_id = self.target.add_node(mapped);
            self.mapped.insert(id, target_id);

            for (name, child) in node.children().iter() {
                if let Some(child_id) = self.resolve_child(child)? {
                    let partition = source[child].kind().partition();
                    self.target.link_child(target_id, name, child_id, partition);
                }
            }
            return Ok(Some(target_id));
        };

        if self.options.redirect_targets == RedirectTargets::RequireVisible
            && !self.redirect_chain_visible(destination)
        {
            self.pruned += 1;
            tracing::trace!(node = %id, "pruned by hidden redirect destination");
            return Ok(None);
        }

        let slot = self.target.reserve();
        self.mapped.insert(id, slot);
        let Some(destination) = self.resolve(destination)? else {
            return Ok(None);
        };
        let mut mapped = self.mapper.map_redirect(node, destination)?;
        self.copy_requirement(id, &mut mapped);
        self.target.fill(slot, mapped);
        Ok(Some(slot))
    }

    /// Whether every node along the redirect chain starting at `start` is
    /// visible. Stops at the first node without a redirect or on a cycle.
    fn redirect_chain_visible(&mut self, start: NodeId) -> bool {
        let mut seen = HashSet::new();
        let mut cursor = start;
        loop {
            if !self.is_visible(cursor) {
                return false;
            }
            if !seen.insert(cursor) {
                return true;
            }
            match self.source[cursor].redirect() {
                Some(next) => cursor = next,
                None => return true,
            }
        }
    }

    fn copy_requirement(&mut self, id: NodeId, mapped: &mut CommandNode<T>) {
        let source = self.source;
        if let Some(requirement) = source[id].requirement() {
            mapped.set_requirement(self.mapper.map_requirement(requirement));
        }
    }
}

use super::CommandTree;
use crate::node::{NodeId, NodeKind};
use crate::{Domain, Vec};
use core::fmt;

/// Indented outline of a [`CommandTree`].
///
/// ```text
/// <root>
///   home
///     <name> [restricted]
///   h -> home
/// ```
///
/// Literals print by name, arguments as `<name>` and opaque nodes as
/// `{name}`. Redirects print their destination's path (`<root>` for the
/// root, `#id` for nodes unreachable through children). Children of a
/// redirecting node are still listed. A child that is also one of its own
/// ancestors prints as `...` instead of recursing.
pub struct TreeDisplay<'a, D: Domain> {
    tree: &'a CommandTree<D>,
}

impl<'a, D: Domain> TreeDisplay<'a, D> {
    pub(crate) fn new(tree: &'a CommandTree<D>) -> Self {
        Self { tree }
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        depth: usize,
        ancestors: &mut Vec<NodeId>,
    ) -> fmt::Result {
        let node = &self.tree[id];
        write!(f, "{:indent$}", "", indent = depth * 2)?;

        if ancestors.contains(&id) {
            return writeln!(f, "...");
        }

        match node.kind() {
            NodeKind::Root => write!(f, "<root>")?,
            NodeKind::Literal => write!(f, "{}", node.name())?,
            NodeKind::Argument { .. } => write!(f, "<{}>", node.name())?,
            NodeKind::Other { .. } => write!(f, "{{{}}}", node.name())?,
        }
        if let Some(target) = node.redirect() {
            write!(f, " -> ")?;
            self.write_path(f, target)?;
        }
        if node.requirement().is_some() {
            write!(f, " [restricted]")?;
        }
        writeln!(f)?;

        ancestors.push(id);
        for child in node.children().ids() {
            self.write_node(f, child, depth + 1, ancestors)?;
        }
        ancestors.pop();
        Ok(())
    }

    fn write_path(&self, f: &mut fmt::Formatter<'_>, target: NodeId) -> fmt::Result {
        match self.tree.path_of(target) {
            Some(path) if path.is_empty() => write!(f, "<root>"),
            Some(path) => write!(f, "{}", path.join(" ")),
            None => write!(f, "{target}"),
        }
    }
}

impl<D: Domain> fmt::Display for TreeDisplay<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ancestors = Vec::new();
        self.write_node(f, self.tree.root(), 0, &mut ancestors)
    }
}

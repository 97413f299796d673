//! Transformation strategies: per-kind rewriting of nodes into a target domain.

use crate::node::{CommandNode, NodeId, NodeKind, Requirement};
use crate::{Domain, Error};

/// Builds target-domain nodes from source-domain nodes.
///
/// The [walker](crate::walker) calls [`Mapper::map_node`] once for every
/// surviving node without a redirect, and [`Mapper::map_redirect`] once for
/// every surviving node with one. Mappers only produce the node itself;
/// children are attached and requirements (through
/// [`Mapper::map_requirement`]) are copied by the walker.
///
/// Override the per-kind hooks to rewrite leaf data. Override `map_node` to
/// intercept every node, calling `super_map_node` for the default dispatch;
/// the default `map_redirect` builds its node through `map_node` too.
///
/// # Example
///
/// ```
/// use cmdgraft_core::{CommandNode, Domain, Mapper, Requirement};
///
/// #[derive(Debug, Clone)]
/// struct Api;
/// impl Domain for Api {
///     type Context = u8;
///     type ArgumentType = &'static str;
///     type Suggestions = ();
/// }
///
/// #[derive(Debug, Clone)]
/// struct Native;
/// impl Domain for Native {
///     type Context = u8;
///     type ArgumentType = u32;
///     type Suggestions = ();
/// }
///
/// // Resolve argument type names into numeric parser ids.
/// struct ParserIds;
///
/// impl Mapper<Api, Native> for ParserIds {
///     fn map_argument(&mut self, name: &str, ty: &&'static str, _: Option<&()>) -> CommandNode<Native> {
///         let id = match *ty {
///             "bool" => 0,
///             "int" => 3,
///             _ => 5,
///         };
///         CommandNode::argument(name, id)
///     }
///
///     fn map_requirement(&mut self, req: &Requirement<u8>) -> Option<Requirement<u8>> {
///         Some(req.clone())
///     }
/// }
/// ```
pub trait Mapper<S: Domain, T: Domain> {
    /// Map a node that has no redirect. The default `map_redirect` also
    /// calls this for redirecting nodes, before attaching the destination.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedNodeKind`] for kinds this mapper has no case for.
    fn map_node(&mut self, node: &CommandNode<S>) -> Result<CommandNode<T>, Error> {
        self.super_map_node(node)
    }

    /// Map a node whose redirect has already been mapped to `destination`
    /// (an id in the target tree).
    fn map_redirect(
        &mut self,
        node: &CommandNode<S>,
        destination: NodeId,
    ) -> Result<CommandNode<T>, Error> {
        Ok(self.map_node(node)?.with_redirect(destination))
    }

    fn map_root(&mut self) -> CommandNode<T> {
        CommandNode::root()
    }

    fn map_literal(&mut self, name: &str) -> CommandNode<T> {
        CommandNode::literal(name)
    }

    /// Map an argument node, re-encoding its type and suggestion source.
    fn map_argument(
        &mut self,
        name: &str,
        ty: &S::ArgumentType,
        suggestions: Option<&S::Suggestions>,
    ) -> CommandNode<T>;

    /// Carry a requirement over to the target context type.
    ///
    /// Returning `None` makes the target node unrestricted.
    fn map_requirement(
        &mut self,
        requirement: &Requirement<S::Context>,
    ) -> Option<Requirement<T::Context>>;

    /// Default dispatch on the node kind.
    ///
    /// Override `map_node` instead of this method.
    fn super_map_node(&mut self, node: &CommandNode<S>) -> Result<CommandNode<T>, Error> {
        match node.kind() {
            NodeKind::Root => Ok(self.map_root()),
            NodeKind::Literal => Ok(self.map_literal(node.name())),
            NodeKind::Argument { ty, suggestions } => {
                Ok(self.map_argument(node.name(), ty, suggestions.as_ref()))
            }
            NodeKind::Other { .. } => Err(Error::unsupported(node.name(), node.kind())),
        }
    }
}

/// Identity strategy: copies every node into a tree of the same domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMapper;

impl<D: Domain> Mapper<D, D> for StandardMapper {
    fn map_argument(
        &mut self,
        name: &str,
        ty: &D::ArgumentType,
        suggestions: Option<&D::Suggestions>,
    ) -> CommandNode<D> {
        let node = CommandNode::argument(name, ty.clone());
        match suggestions {
            Some(source) => node.with_suggestions(source.clone()),
            None => node,
        }
    }

    fn map_requirement(
        &mut self,
        requirement: &Requirement<D::Context>,
    ) -> Option<Requirement<D::Context>> {
        Some(requirement.clone())
    }
}

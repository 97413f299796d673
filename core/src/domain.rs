//! Domain trait - the leaf data a command tree is parameterized by.

use core::fmt::Debug;

/// Fixes the types a [`CommandTree`](crate::CommandTree) carries at its leaves.
///
/// A tree built for one domain (say, a plugin API) can be mapped into a tree
/// for another domain (say, the server's native representation) through a
/// [`Mapper`](crate::Mapper). Domains are usually zero-sized marker types:
///
/// ```
/// use cmdgraft_core::Domain;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Chat;
///
/// impl Domain for Chat {
///     type Context = String;
///     type ArgumentType = &'static str;
///     type Suggestions = &'static str;
/// }
/// ```
pub trait Domain: Clone + Debug {
    /// Value that requirement predicates are evaluated against (usually the
    /// command sender).
    type Context;

    /// Argument type descriptor stored on argument nodes.
    type ArgumentType: Clone + Debug;

    /// Custom suggestion source an argument node may override suggestions with.
    type Suggestions: Clone + Debug;
}

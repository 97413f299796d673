//! Configuration options for tree walks.

/// How redirect destinations interact with visibility filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectTargets {
    /// Resolve every destination, even one the context cannot see.
    ///
    /// An alias stays usable when its canonical command is hidden from
    /// listings; the hidden destination is mapped but not attached under
    /// its own parent.
    #[default]
    AlwaysResolve,

    /// Prune a redirecting node when the context cannot see its destination.
    RequireVisible,
}

/// Configuration options for [`TreeWalker`](crate::walker::TreeWalker).
///
/// # Example
///
/// ```
/// use cmdgraft_core::{RedirectTargets, WalkOptions};
///
/// let options = WalkOptions {
///     redirect_targets: RedirectTargets::RequireVisible,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Default: [`RedirectTargets::AlwaysResolve`]
    pub redirect_targets: RedirectTargets,
}

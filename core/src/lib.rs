//! Command-grammar tree transformation.
//!
//! This crate maps a tree of command nodes (root, literal, argument and
//! opaque nodes) built for one [`Domain`] into an equivalent tree for
//! another, and edits existing trees in place.
//!
//! ## Structure
//!
//! - **Node model** ([`node`]): [`CommandNode`], [`NodeKind`], [`Requirement`]
//!   and the indexed [`Children`] collection
//! - **Trees** ([`CommandTree`]): arena storage, insertion, lookup, aliasing
//!   and coordinated removal
//! - **Strategies** ([`Mapper`]): per-kind rewriting of leaf data, with the
//!   identity [`StandardMapper`]
//! - **Walker** ([`walker`]): memoized, redirect-aware, visibility-filtered
//!   mapping of a whole tree
//!
//! Everything is single-threaded and synchronous. A walk borrows its source
//! tree immutably, so the borrow checker rules out editing a tree while it
//! is being mapped.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{string::String, string::ToString, vec::Vec};

pub mod domain;
pub mod error;
pub mod mapper;
pub mod node;
pub mod options;
pub mod tree;
pub mod walker;

pub use domain::Domain;
pub use error::Error;
pub use mapper::{Mapper, StandardMapper};
pub use node::{Children, CommandNode, NodeId, NodeKind, Requirement};
pub use options::{RedirectTargets, WalkOptions};
pub use tree::{CommandTree, TreeDisplay};
pub use walker::{TreeWalker, map_tree};

/// Test utilities: a small domain and logging setup.
#[cfg(test)]
pub mod test_utils {
    use crate::Domain;

    /// Domain whose context is the caller's role name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Roles;

    impl Domain for Roles {
        type Context = &'static str;
        type ArgumentType = &'static str;
        type Suggestions = &'static str;
    }

    /// Requirement predicate passing only for `"admin"`.
    pub fn admin_only(role: &&'static str) -> bool {
        *role == "admin"
    }

    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

//! cmdgraft - transplant command trees between domains
//!
//! # Overview
//!
//! A command tree (the grammar a command dispatcher parses against) is
//! usually built once, against one API, and then needed in another shape:
//! a server's native representation, a filtered view for one player, a
//! copy with argument types re-encoded. cmdgraft does that transplant:
//!
//! - Walk a source tree with a pluggable [`Mapper`] and build the target tree
//! - Resolve redirects once each, even when they form cycles
//! - Prune nodes whose [`Requirement`] fails for a caller-supplied context
//! - Alias nodes and remove children without breaking the per-kind indices
//!
//! # Quick Start
//!
//! ```
//! use cmdgraft::{CommandNode, CommandTree, Domain, StandardMapper, map_tree};
//!
//! #[derive(Debug, Clone)]
//! struct Server;
//!
//! impl Domain for Server {
//!     type Context = u8; // permission level
//!     type ArgumentType = &'static str;
//!     type Suggestions = ();
//! }
//!
//! let mut tree = CommandTree::<Server>::new();
//! let root = tree.root();
//! let gamemode = tree
//!     .attach(root, CommandNode::literal("gamemode").requires(|level: &u8| *level >= 2))
//!     .unwrap();
//! tree.attach(gamemode, CommandNode::argument("mode", "gamemode")).unwrap();
//! tree.attach(root, CommandNode::literal("gm").with_redirect(gamemode)).unwrap();
//! tree.attach(root, CommandNode::literal("help")).unwrap();
//!
//! // What a level 0 player gets to see.
//! let visible = map_tree(&tree, &mut StandardMapper, Some(&0)).unwrap();
//! assert!(visible.find(&["gamemode"]).is_none());
//! assert!(visible.find(&["help"]).is_some());
//! ```
//!
//! # Editing
//!
//! ```
//! use cmdgraft::{CommandNode, CommandTree, Domain};
//!
//! # #[derive(Debug, Clone)]
//! # struct Server;
//! # impl Domain for Server {
//! #     type Context = u8;
//! #     type ArgumentType = &'static str;
//! #     type Suggestions = ();
//! # }
//! let mut tree = CommandTree::<Server>::new();
//! let root = tree.root();
//! let teleport = tree.attach(root, CommandNode::literal("teleport")).unwrap();
//! tree.attach(teleport, CommandNode::argument("target", "entity")).unwrap();
//!
//! // Register `tp` as a second name for `teleport`, sharing its children.
//! let tp = tree.alias(teleport, "tp").unwrap();
//! tree.add_child(root, tp).unwrap();
//! assert_eq!(tree.find(&["tp", "target"]), tree.find(&["teleport", "target"]));
//!
//! // Unregister both; a missing name only shows up in the result.
//! assert!(!tree.remove_children(root, ["teleport", "tp", "tele"]));
//! assert!(tree[root].children().is_empty());
//! ```

// Re-export public API from cmdgraft_core
pub use cmdgraft_core::{
    Children, CommandNode, CommandTree, Domain, Error, Mapper, NodeId, NodeKind, RedirectTargets,
    Requirement, StandardMapper, TreeDisplay, TreeWalker, WalkOptions, map_tree,
};

// Re-export modules for the less common items
pub use cmdgraft_core::{mapper, node, options, tree, walker};

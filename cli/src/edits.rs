//! `--alias` and `--remove`, applied to the described tree before mapping.

use crate::description::{Described, find_path};
use crate::error::CliError;
use cmdgraft::{CommandTree, NodeId};

/// Split `path` into its parent's id and the last name.
fn parent_and_name<'p>(
    tree: &CommandTree<Described>,
    path: &'p str,
) -> Result<(NodeId, &'p str), CliError> {
    let unknown = || CliError::UnknownPath {
        path: path.to_string(),
    };
    let trimmed = path.trim();
    let (parent, name) = match trimmed.rsplit_once(' ') {
        Some((parent, name)) => (find_path(tree, parent).ok_or_else(unknown)?, name),
        None => (tree.root(), trimmed),
    };
    if name.is_empty() {
        return Err(unknown());
    }
    Ok((parent, name))
}

/// Apply `PATH=NAME`: register an alias of the node at `PATH` as `NAME`,
/// next to the original.
pub fn apply_alias(tree: &mut CommandTree<Described>, pair: &str) -> Result<NodeId, CliError> {
    let (path, name) = pair
        .split_once('=')
        .filter(|(path, name)| !path.trim().is_empty() && !name.trim().is_empty())
        .ok_or_else(|| CliError::MalformedAlias(pair.to_string()))?;

    let (parent, last) = parent_and_name(tree, path)?;
    let node = tree.child(parent, last).ok_or_else(|| CliError::UnknownPath {
        path: path.to_string(),
    })?;
    let alias = tree.alias(node, name.trim())?;
    let registered = tree.add_child(parent, alias)?;
    tracing::debug!(path, alias = name.trim(), "registered alias");
    Ok(registered)
}

/// Unregister the node at `path` from its parent.
pub fn apply_removal(tree: &mut CommandTree<Described>, path: &str) -> Result<NodeId, CliError> {
    let (parent, name) = parent_and_name(tree, path)?;
    let removed = tree
        .remove_child(parent, name)
        .ok_or_else(|| CliError::UnknownPath {
            path: path.to_string(),
        })?;
    tracing::debug!(path, "removed command");
    Ok(removed)
}

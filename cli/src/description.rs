//! JSON command descriptions.
//!
//! ```json
//! {
//!   "children": [
//!     { "kind": "literal", "name": "gamemode", "requires": "op", "children": [
//!       { "kind": "argument", "name": "mode", "type": "word", "suggest": "ask_server" }
//!     ] },
//!     { "kind": "literal", "name": "gm", "requires": "op", "redirect": "gamemode" }
//!   ]
//! }
//! ```
//!
//! Redirects name their destination by path (space separated, `""` for the
//! root). They are resolved after every node exists, so a redirect may point
//! forward or form a cycle.

use crate::error::CliError;
use crate::resolve::ArgumentParser;
use cmdgraft::{CommandNode, CommandTree, Domain, NodeId};
use hashbrown::HashSet;
use serde::Deserialize;

/// Permissions granted to whoever the tree is filtered for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions(HashSet<String>);

impl Permissions {
    pub fn grants(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }
}

impl<S: Into<String>> FromIterator<S> for Permissions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Commands as loaded from a description: type and suggestion names are
/// kept as written.
#[derive(Debug, Clone)]
pub struct Described;

impl Domain for Described {
    type Context = Permissions;
    type ArgumentType = String;
    type Suggestions = String;
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDescription {
    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindDescription {
    Literal,
    Argument,
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDescription {
    pub kind: KindDescription,
    pub name: String,
    /// Argument type, or the declared kind of an `other` node.
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub suggest: Option<String>,
    pub requires: Option<String>,
    pub redirect: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

/// Parse a JSON description into a tree.
pub fn parse(json: &str) -> Result<CommandTree<Described>, CliError> {
    let description: TreeDescription = serde_json::from_str(json)?;
    build(&description)
}

/// Build a tree from an already deserialized description.
pub fn build(description: &TreeDescription) -> Result<CommandTree<Described>, CliError> {
    let mut tree = CommandTree::new();
    let mut redirects = Vec::new();
    let root = tree.root();
    let mut path = Vec::new();
    for child in &description.children {
        add_described(&mut tree, root, child, &mut path, &mut redirects)?;
    }

    for (id, from, to) in redirects {
        let destination = find_path(&tree, &to).ok_or(CliError::UnknownRedirect { from, to })?;
        tree.node_mut(id).set_redirect(Some(destination));
    }
    tracing::debug!(nodes = tree.len(), "loaded command description");
    Ok(tree)
}

/// Node id at a space separated path; `""` is the root.
pub fn find_path<D: Domain>(tree: &CommandTree<D>, path: &str) -> Option<NodeId> {
    let names: Vec<&str> = path.split_whitespace().collect();
    tree.find(&names)
}

fn add_described(
    tree: &mut CommandTree<Described>,
    parent: NodeId,
    description: &NodeDescription,
    path: &mut Vec<String>,
    redirects: &mut Vec<(NodeId, String, String)>,
) -> Result<(), CliError> {
    let name = description.name.clone();
    let mut node = match description.kind {
        KindDescription::Literal => CommandNode::literal(name.clone()),
        KindDescription::Argument => {
            let ty = description
                .ty
                .clone()
                .ok_or_else(|| CliError::MissingArgumentType { name: name.clone() })?;
            if ArgumentParser::from_name(&ty).is_none() {
                return Err(CliError::UnknownArgumentType { name, ty });
            }
            let node = CommandNode::argument(name.clone(), ty);
            match &description.suggest {
                Some(source) => node.with_suggestions(source.clone()),
                None => node,
            }
        }
        KindDescription::Other => {
            let declared = description.ty.as_deref().unwrap_or("other");
            CommandNode::other(name.clone(), declared)
        }
    };
    if let Some(permission) = description.requires.clone() {
        node = node.requires(move |granted: &Permissions| granted.grants(&permission));
    }

    let id = tree.attach(parent, node)?;
    path.push(name);
    if let Some(to) = &description.redirect {
        redirects.push((id, path.join(" "), to.clone()));
    }
    for child in &description.children {
        add_described(tree, id, child, path, redirects)?;
    }
    path.pop();
    Ok(())
}

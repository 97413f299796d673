#![allow(dead_code)]

use cmdgraft::{
    CommandNode, CommandTree, Domain, RedirectTargets, StandardMapper, TreeWalker, WalkOptions,
};

/// A game server's command grammar: the context is the caller's
/// permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Server;

impl Domain for Server {
    type Context = u8;
    type ArgumentType = &'static str;
    type Suggestions = &'static str;
}

/// Requirement predicate passing for permission level `min` and above.
pub fn level(min: u8) -> impl Fn(&u8) -> bool + Send + Sync + 'static {
    move |level: &u8| *level >= min
}

/// The grammar most tests run against:
///
/// ```text
/// help
/// gamemode (level 2) <mode>
/// gm -> gamemode (level 2)
/// teleport (level 2) <target>
/// tp, alias of teleport
/// execute { as <targets> -> execute, run -> <root> }
/// msg <targets> <message>
/// ```
pub fn server_tree() -> CommandTree<Server> {
    let mut tree = CommandTree::new();
    let root = tree.root();

    tree.attach(root, CommandNode::literal("help")).unwrap();

    let gamemode = tree
        .attach(root, CommandNode::literal("gamemode").requires(level(2)))
        .unwrap();
    tree.attach(gamemode, CommandNode::argument("mode", "gamemode"))
        .unwrap();
    tree.attach(
        root,
        CommandNode::literal("gm")
            .with_redirect(gamemode)
            .requires(level(2)),
    )
    .unwrap();

    let teleport = tree
        .attach(root, CommandNode::literal("teleport").requires(level(2)))
        .unwrap();
    tree.attach(teleport, CommandNode::argument("target", "entity"))
        .unwrap();
    let tp = tree.alias(teleport, "tp").unwrap();
    tree.add_child(root, tp).unwrap();

    let execute = tree.attach(root, CommandNode::literal("execute")).unwrap();
    let execute_as = tree.attach(execute, CommandNode::literal("as")).unwrap();
    tree.attach(
        execute_as,
        CommandNode::argument("targets", "entities").with_redirect(execute),
    )
    .unwrap();
    tree.attach(execute, CommandNode::literal("run").with_redirect(root))
        .unwrap();

    let msg = tree.attach(root, CommandNode::literal("msg")).unwrap();
    let targets = tree
        .attach(
            msg,
            CommandNode::argument("targets", "entities").with_suggestions("players"),
        )
        .unwrap();
    tree.attach(targets, CommandNode::argument("message", "greedy"))
        .unwrap();

    tree
}

/// Copy `tree` as seen at permission `level` (`None` sees everything).
pub fn view(tree: &CommandTree<Server>, level: Option<u8>) -> CommandTree<Server> {
    cmdgraft::map_tree(tree, &mut StandardMapper, level.as_ref()).unwrap()
}

/// Like [`view`], but redirects into hidden nodes are pruned.
pub fn strict_view(tree: &CommandTree<Server>, level: u8) -> CommandTree<Server> {
    TreeWalker::new(tree, &mut StandardMapper)
        .with_context(Some(&level))
        .with_options(WalkOptions {
            redirect_targets: RedirectTargets::RequireVisible,
        })
        .run()
        .unwrap()
}

#[macro_export]
macro_rules! test_case {
    ($name:ident, level: $level:expr, outline: $outline:expr $(,)?) => {
        #[test]
        fn $name() {
            let tree = $crate::cases::server_tree();
            let mapped = $crate::cases::view(&tree, $level);
            pretty_assertions::assert_eq!(mapped.display().to_string(), $outline);
        }
    };
}

mod cases;

use cases::{Server, server_tree, view};
use cmdgraft::{CommandNode, CommandTree};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn test_redirect_shares_destination_node() {
    let tree = server_tree();
    let operator = view(&tree, Some(2));

    let gm = operator.find(&["gm"]).unwrap();
    assert_eq!(operator[gm].redirect(), operator.find(&["gamemode"]));
    // A redirecting node carries no children of its own.
    assert!(operator[gm].children().is_empty());
}

#[test]
fn test_execute_loop_terminates() {
    let tree = server_tree();
    let mapped = view(&tree, None);

    let execute = mapped.find(&["execute"]).unwrap();
    let targets = mapped.find(&["execute", "as", "targets"]).unwrap();
    assert_eq!(mapped[targets].redirect(), Some(execute));

    let run = mapped.find(&["execute", "run"]).unwrap();
    assert_eq!(mapped[run].redirect(), Some(mapped.root()));
}

#[test]
fn test_redirect_cycle_between_literals() {
    let mut tree = CommandTree::<Server>::new();
    let root = tree.root();

    // ping -> pong -> ping, each reachable from the root.
    let ping = tree.attach(root, CommandNode::literal("ping")).unwrap();
    let pong = tree
        .attach(root, CommandNode::literal("pong").with_redirect(ping))
        .unwrap();
    tree.node_mut(ping).set_redirect(Some(pong));

    let mapped = view(&tree, None);

    assert_eq!(mapped.len(), 3);
    assert_eq!(
        mapped.display().to_string(),
        indoc! {"
            <root>
              ping -> pong
              pong -> ping
        "}
    );
}

#[test]
fn test_redirect_destination_visited_before_its_parent() {
    let mut tree = CommandTree::<Server>::new();
    let root = tree.root();

    // `tell` points into the middle of `msg` before `msg` is walked.
    let msg = tree.add_node(CommandNode::literal("msg"));
    let targets = tree
        .attach(msg, CommandNode::argument("targets", "entities"))
        .unwrap();
    tree.attach(targets, CommandNode::argument("message", "greedy"))
        .unwrap();
    tree.attach(root, CommandNode::literal("tell").with_redirect(targets))
        .unwrap();
    tree.add_child(root, msg).unwrap();

    let mapped = view(&tree, None);

    assert_eq!(
        mapped.display().to_string(),
        indoc! {"
            <root>
              tell -> msg targets
              msg
                <targets>
                  <message>
        "}
    );
    let tell = mapped.find(&["tell"]).unwrap();
    assert_eq!(mapped[tell].redirect(), mapped.find(&["msg", "targets"]));
}

#[test]
fn test_chained_redirects_resolve_to_distinct_nodes() {
    let mut tree = CommandTree::<Server>::new();
    let root = tree.root();

    let list = tree.attach(root, CommandNode::literal("list")).unwrap();
    let ls = tree
        .attach(root, CommandNode::literal("ls").with_redirect(list))
        .unwrap();
    tree.attach(root, CommandNode::literal("l").with_redirect(ls))
        .unwrap();

    let mapped = view(&tree, None);

    assert_eq!(
        mapped.display().to_string(),
        indoc! {"
            <root>
              list
              ls -> list
              l -> ls
        "}
    );
}

mod cases;

use cases::{Server, level, server_tree, strict_view, view};
use cmdgraft::{CommandNode, CommandTree};
use indoc::indoc;
use pretty_assertions::assert_eq;

test_case!(
    unfiltered_keeps_everything,
    level: None,
    outline: indoc! {"
        <root>
          help
          gamemode [restricted]
            <mode>
          gm -> gamemode [restricted]
          teleport [restricted]
            <target>
          tp [restricted]
            <target>
          execute
            as
              <targets> -> execute
            run -> <root>
          msg
            <targets>
              <message>
    "},
);

test_case!(
    operator_sees_everything,
    level: Some(2),
    outline: indoc! {"
        <root>
          help
          gamemode [restricted]
            <mode>
          gm -> gamemode [restricted]
          teleport [restricted]
            <target>
          tp [restricted]
            <target>
          execute
            as
              <targets> -> execute
            run -> <root>
          msg
            <targets>
              <message>
    "},
);

test_case!(
    player_loses_restricted_commands,
    level: Some(0),
    outline: indoc! {"
        <root>
          help
          execute
            as
              <targets> -> execute
            run -> <root>
          msg
            <targets>
              <message>
    "},
);

#[test]
fn test_unfiltered_copy_matches_source_outline() {
    let tree = server_tree();
    assert_eq!(
        view(&tree, None).display().to_string(),
        tree.display().to_string()
    );
}

#[test]
fn test_source_is_left_untouched() {
    let tree = server_tree();
    let before = tree.display().to_string();
    let nodes = tree.len();

    view(&tree, Some(0));

    assert_eq!(tree.len(), nodes);
    assert_eq!(tree.display().to_string(), before);
}

#[test]
fn test_filtered_copy_only_allocates_visible_nodes() {
    let tree = server_tree();
    let player = view(&tree, Some(0));

    // root, help, execute, as, <targets>, run, msg, <targets>, <message>
    assert_eq!(player.len(), 9);
}

#[test]
fn test_alias_shares_one_mapped_subtree() {
    let tree = server_tree();
    let operator = view(&tree, Some(2));

    let via_teleport = operator.find(&["teleport", "target"]).unwrap();
    let via_tp = operator.find(&["tp", "target"]).unwrap();
    assert_eq!(via_teleport, via_tp);
}

#[test]
fn test_redirect_into_hidden_node_still_resolves() {
    let mut tree = server_tree();
    let root = tree.root();
    let teleport = tree.find(&["teleport"]).unwrap();
    tree.attach(root, CommandNode::literal("spawn").with_redirect(teleport))
        .unwrap();

    let player = view(&tree, Some(0));

    let spawn = player.find(&["spawn"]).unwrap();
    let destination = player[spawn].redirect().unwrap();
    assert_eq!(player[destination].name(), "teleport");
    assert!(player[destination].children().contains("target"));
    // Reachable only through the redirect.
    assert_eq!(player.find(&["teleport"]), None);
    assert_eq!(player.path_of(destination), None);
}

#[test]
fn test_strict_view_prunes_redirect_into_hidden_node() {
    let mut tree = server_tree();
    let root = tree.root();
    let teleport = tree.find(&["teleport"]).unwrap();
    tree.attach(root, CommandNode::literal("spawn").with_redirect(teleport))
        .unwrap();

    let player = strict_view(&tree, 0);
    assert_eq!(player.find(&["spawn"]), None);
    assert_eq!(
        player.display().to_string(),
        view(&server_tree(), Some(0)).display().to_string()
    );

    let operator = strict_view(&tree, 2);
    let spawn = operator.find(&["spawn"]).unwrap();
    assert_eq!(operator[spawn].redirect(), operator.find(&["teleport"]));
}

#[test]
fn test_pruned_subtree_hides_visible_descendants() {
    let mut tree = CommandTree::<Server>::new();
    let root = tree.root();
    let admin = tree
        .attach(root, CommandNode::literal("admin").requires(level(4)))
        .unwrap();
    let kick = tree.attach(admin, CommandNode::literal("kick")).unwrap();
    tree.attach(kick, CommandNode::argument("player", "entity"))
        .unwrap();

    let operator = view(&tree, Some(2));
    assert_eq!(operator.display().to_string(), "<root>\n");
    assert_eq!(operator.len(), 1);
}

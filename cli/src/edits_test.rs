use crate::description::{find_path, parse};
use crate::edits::{apply_alias, apply_removal};
use crate::error::CliError;
use pretty_assertions::assert_eq;

const TELEPORT: &str = r#"{
  "children": [
    { "kind": "literal", "name": "teleport", "children": [
      { "kind": "argument", "name": "target", "type": "entity", "children": [
        { "kind": "argument", "name": "destination", "type": "position" }
      ] }
    ] },
    { "kind": "literal", "name": "help" }
  ]
}"#;

#[test]
fn test_alias_top_level_command() {
    let mut tree = parse(TELEPORT).unwrap();
    let tp = apply_alias(&mut tree, "teleport=tp").unwrap();

    assert_eq!(find_path(&tree, "tp"), Some(tp));
    assert_eq!(
        find_path(&tree, "tp target destination"),
        find_path(&tree, "teleport target destination")
    );
}

#[test]
fn test_alias_nested_argument() {
    let mut tree = parse(TELEPORT).unwrap();
    apply_alias(&mut tree, "teleport target = who").unwrap();

    let who = find_path(&tree, "teleport who").unwrap();
    assert!(tree[who].is_argument());
    assert!(tree[who].children().contains("destination"));
}

#[test]
fn test_alias_rejects_malformed_pairs() {
    let mut tree = parse(TELEPORT).unwrap();
    for pair in ["teleport", "=tp", "teleport=", " = "] {
        assert!(
            matches!(apply_alias(&mut tree, pair), Err(CliError::MalformedAlias(_))),
            "{pair:?}"
        );
    }
}

#[test]
fn test_alias_unknown_path() {
    let mut tree = parse(TELEPORT).unwrap();
    assert!(matches!(
        apply_alias(&mut tree, "warp=w"),
        Err(CliError::UnknownPath { ref path }) if path == "warp"
    ));
}

#[test]
fn test_remove_nested_and_top_level() {
    let mut tree = parse(TELEPORT).unwrap();

    apply_removal(&mut tree, "teleport target destination").unwrap();
    assert_eq!(find_path(&tree, "teleport target destination"), None);
    assert!(find_path(&tree, "teleport target").is_some());

    apply_removal(&mut tree, "help").unwrap();
    assert_eq!(find_path(&tree, "help"), None);
    assert_eq!(tree[tree.root()].children().len(), 1);
}

#[test]
fn test_remove_unknown_path() {
    let mut tree = parse(TELEPORT).unwrap();
    assert!(matches!(
        apply_removal(&mut tree, "teleport here"),
        Err(CliError::UnknownPath { .. })
    ));
    assert!(matches!(
        apply_removal(&mut tree, ""),
        Err(CliError::UnknownPath { .. })
    ));
}

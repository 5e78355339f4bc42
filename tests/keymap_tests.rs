//! Integration tests for the leader binding trie

use quill::commands::CommandId;
use quill::keymap::{keymap, KeyNode, LeaderState};

#[test]
fn test_root_is_a_group() {
    let root = keymap();

    assert!(root.is_group());
    assert_eq!(root.title(), "leader");
}

#[test]
fn test_root_hints_in_registration_order() {
    let hints = keymap().hints();

    let keys: Vec<char> = hints.iter().map(|h| h.key).collect();
    assert_eq!(keys, vec!['f', 'v', 'p', 'q']);
}

#[test]
fn test_hint_kinds() {
    let hints = keymap().hints();

    let file = hints.iter().find(|h| h.key == 'f').unwrap();
    let quit = hints.iter().find(|h| h.key == 'q').unwrap();

    assert!(file.is_group);
    assert_eq!(file.title, "file");
    assert!(!quit.is_group);
    assert_eq!(quit.title, "quit");
}

#[test]
fn test_step_into_group() {
    let root = keymap();

    let file = root.child('f').unwrap();

    assert!(file.is_group());
    let keys: Vec<char> = file.hints().iter().map(|h| h.key).collect();
    assert_eq!(keys, vec!['f', 's', 'n']);
}

#[test]
fn test_step_to_binding() {
    let root = keymap();

    let open = root.child('f').and_then(|n| n.child('f')).unwrap();

    match open {
        KeyNode::Binding { command, .. } => assert_eq!(*command, CommandId::FileOpen),
        KeyNode::Group { .. } => panic!("expected a binding at f f"),
    }
}

#[test]
fn test_unknown_key_has_no_child() {
    assert!(keymap().child('z').is_none());
}

#[test]
fn test_binding_has_no_children() {
    let quit = keymap().child('q').unwrap();

    assert!(quit.child('q').is_none());
    assert!(quit.hints().is_empty());
}

#[test]
fn test_leader_state_starts_at_root() {
    let state = LeaderState::new();

    assert!(state.keys.is_empty());
    assert_eq!(state.node.title(), "leader");
}

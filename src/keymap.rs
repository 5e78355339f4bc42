//! Leader-key binding trie.
//!
//! The trie is built once at first use and shared by reference for the
//! life of the process. Internal nodes group further choices under a
//! title; leaves bind a command. Children keep their insertion order so
//! the hint overlay lists them the way they were registered, not sorted.

use std::sync::OnceLock;

use crate::commands::CommandId;

#[derive(Debug)]
pub enum KeyNode {
    Group {
        title: &'static str,
        children: Vec<(char, KeyNode)>,
    },
    Binding {
        title: &'static str,
        command: CommandId,
    },
}

impl KeyNode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Group { title, .. } | Self::Binding { title, .. } => title,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// The child bound to `key`, stepping only from groups. Bindings have
    /// no children; dispatch never steps from them.
    pub fn child(&self, key: char) -> Option<&KeyNode> {
        match self {
            Self::Group { children, .. } => children
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, node)| node),
            Self::Binding { .. } => None,
        }
    }

    /// Hint rows for the overlay: one per immediate child, insertion order.
    pub fn hints(&self) -> Vec<Hint> {
        match self {
            Self::Group { children, .. } => children
                .iter()
                .map(|(key, node)| Hint {
                    key: *key,
                    title: node.title(),
                    is_group: node.is_group(),
                })
                .collect(),
            Self::Binding { .. } => Vec::new(),
        }
    }
}

/// One row of the leader hint overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub key: char,
    pub title: &'static str,
    pub is_group: bool,
}

/// In-flight leader sequence: the keys accepted so far and the trie node
/// they lead to. Created on LEADER entry, discarded on exit.
pub struct LeaderState {
    pub keys: Vec<char>,
    pub node: &'static KeyNode,
}

impl LeaderState {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            node: keymap(),
        }
    }
}

impl Default for LeaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide binding trie.
pub fn keymap() -> &'static KeyNode {
    static KEYMAP: OnceLock<KeyNode> = OnceLock::new();
    KEYMAP.get_or_init(build_keymap)
}

fn build_keymap() -> KeyNode {
    KeyNode::Group {
        title: "leader",
        children: vec![
            (
                'f',
                KeyNode::Group {
                    title: "file",
                    children: vec![
                        (
                            'f',
                            KeyNode::Binding {
                                title: "open file",
                                command: CommandId::FileOpen,
                            },
                        ),
                        (
                            's',
                            KeyNode::Binding {
                                title: "save file",
                                command: CommandId::FileSave,
                            },
                        ),
                        (
                            'n',
                            KeyNode::Binding {
                                title: "new file",
                                command: CommandId::FileNew,
                            },
                        ),
                    ],
                },
            ),
            (
                'v',
                KeyNode::Group {
                    title: "view",
                    children: vec![(
                        'r',
                        KeyNode::Binding {
                            title: "relative line numbers",
                            command: CommandId::ToggleRelativeNumbers,
                        },
                    )],
                },
            ),
            (
                'p',
                KeyNode::Binding {
                    title: "command palette",
                    command: CommandId::PaletteOpen,
                },
            ),
            (
                'q',
                KeyNode::Binding {
                    title: "quit",
                    command: CommandId::Quit,
                },
            ),
        ],
    }
}

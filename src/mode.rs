//! Modal editing states.
//!
//! The editor is always in exactly one [`Mode`]. This is a pure data type;
//! key dispatch and mode transitions live in the editor core. VISUAL is
//! movement-only in this editor (no selection ranges), differing from
//! NORMAL only in its status-line label.

use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Default mode. Keys are commands, not text input.
    #[default]
    Normal,
    /// Text entry mode. Keys produce characters in the buffer.
    Insert,
    /// Movement mode with a distinct label; no selection semantics.
    Visual,
    /// Reported while the command palette is open; never stored.
    Command,
    /// A leader sequence is in flight; keys step the binding trie.
    Leader,
}

impl Mode {
    /// Human-readable name for the status line.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual => "VISUAL",
            Self::Command => "COMMAND",
            Self::Leader => "LEADER",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

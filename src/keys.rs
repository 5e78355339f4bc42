//! Terminal-independent key representation.
//!
//! The shell translates raw crossterm events into [`Key`] at the input
//! boundary, so the editor core can be driven from tests without a
//! terminal attached.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Translate a crossterm key event. Events with no editor meaning
    /// (function keys, media keys, releases on some terminals) map to
    /// `None` and are dropped at the boundary.
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        match (event.code, event.modifiers) {
            (KeyCode::Char(c), KeyModifiers::CONTROL) => Some(Key::Ctrl(c)),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Key::Char(c)),
            (KeyCode::Enter, _) => Some(Key::Enter),
            (KeyCode::Backspace, _) => Some(Key::Backspace),
            (KeyCode::Delete, _) => Some(Key::Delete),
            (KeyCode::Esc, _) => Some(Key::Escape),
            (KeyCode::Up, _) => Some(Key::Up),
            (KeyCode::Down, _) => Some(Key::Down),
            (KeyCode::Left, _) => Some(Key::Left),
            (KeyCode::Right, _) => Some(Key::Right),
            _ => None,
        }
    }
}

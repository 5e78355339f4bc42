//! Editor core: one state value, one update function.
//!
//! Every key event enters through [`Editor::handle_key`], which routes by
//! the open palette first and the current mode second, mutates the
//! buffer/cursor/viewport, and returns the side effects the shell must
//! perform (file I/O, settings persistence, quit). The core itself never
//! touches the filesystem, so the whole state machine is unit-testable.
//!
//! Each event ends with the cursor clamped against the buffer and the
//! viewport scrolled to keep it visible.

use std::path::PathBuf;

use crate::buffer::Buffer;
use crate::commands::{command_by_title, CommandId};
use crate::keymap::{Hint, KeyNode, LeaderState};
use crate::keys::Key;
use crate::mode::Mode;
use crate::palette::{path_suffix, PaletteState, OPEN_PREFIX};
use crate::view::{clamp_cursor, Cursor, Movement, Viewport};

/// A side effect requested by the core and performed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenFile(PathBuf),
    SaveFile(PathBuf),
    PersistSettings,
    Quit,
}

pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub mode: Mode,
    pub leader: Option<LeaderState>,
    pub palette: Option<PaletteState>,
    pub status: Option<String>,
    pub project_root: Option<PathBuf>,

    /// Settings mirrored from the config file by the shell.
    pub leader_key: char,
    pub relative_numbers: bool,
    pub palette_limit: usize,

    /// Text-area height from the last draw, used to keep the cursor
    /// visible while handling events between draws.
    view_height: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            mode: Mode::Normal,
            leader: None,
            palette: None,
            status: None,
            project_root: None,
            leader_key: ' ',
            relative_numbers: true,
            palette_limit: 50,
            view_height: 24,
        }
    }

    /// Replace the document wholesale after a successful load. Cursor and
    /// viewport reset to the origin.
    pub fn load_buffer(&mut self, buffer: Buffer) {
        self.buffer = buffer;
        self.cursor = Cursor::default();
        self.viewport = Viewport::default();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// The mode label shown to the user. The stored mode is untouched
    /// while the palette is open, but the palette reports as COMMAND.
    pub fn mode_label(&self) -> Mode {
        if self.palette.is_some() {
            Mode::Command
        } else {
            self.mode
        }
    }

    /// Process one key event to completion. Returns the effects for the
    /// shell to perform before the next event is accepted.
    pub fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        if key == Key::Ctrl('c') {
            return vec![Effect::Quit];
        }

        let effects = if self.palette.is_some() {
            self.handle_palette_key(key)
        } else {
            match self.mode {
                Mode::Normal | Mode::Visual => self.handle_movement_key(key),
                Mode::Insert => self.handle_insert_key(key),
                Mode::Leader => self.handle_leader_key(key),
                // Never stored; the palette branch above covers COMMAND.
                Mode::Command => Vec::new(),
            }
        };

        self.cursor = clamp_cursor(&self.buffer, self.cursor);
        self.viewport.ensure_visible(self.view_height, self.cursor);
        effects
    }

    /// NORMAL and VISUAL share movement; only NORMAL enters other modes.
    fn handle_movement_key(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::Char(c) if c == self.leader_key && self.mode == Mode::Normal => {
                self.mode = Mode::Leader;
                self.leader = Some(LeaderState::new());
            }
            Key::Char('i') if self.mode == Mode::Normal => self.mode = Mode::Insert,
            Key::Char('v') if self.mode == Mode::Normal => self.mode = Mode::Visual,
            Key::Char(':') if self.mode == Mode::Normal => self.open_palette(""),
            Key::Escape => self.mode = Mode::Normal,
            Key::Char('h') | Key::Left => self.step(Movement::Left),
            Key::Char('l') | Key::Right => self.step(Movement::Right),
            Key::Char('j') | Key::Down => self.step(Movement::Down),
            Key::Char('k') | Key::Up => self.step(Movement::Up),
            Key::Char('0') => self.step(Movement::LineStart),
            Key::Char('$') => self.step(Movement::LineEnd),
            Key::Char('x') | Key::Delete => {
                self.buffer.delete_char_forward(self.cursor.row, self.cursor.col);
            }
            Key::Ctrl('s') => return self.apply_command(CommandId::FileSave),
            _ => {}
        }
        Vec::new()
    }

    fn handle_insert_key(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::Escape => self.mode = Mode::Normal,
            Key::Backspace => {
                let (row, col) = self
                    .buffer
                    .delete_char_backward(self.cursor.row, self.cursor.col);
                self.cursor = Cursor::new(row, col);
            }
            Key::Enter => {
                let (row, col) = self.buffer.insert_newline(self.cursor.row, self.cursor.col);
                self.cursor = Cursor::new(row, col);
            }
            Key::Delete => {
                self.buffer.delete_char_forward(self.cursor.row, self.cursor.col);
            }
            Key::Char(c) => {
                self.buffer.insert_char(self.cursor.row, self.cursor.col, c);
                self.cursor.col += 1;
            }
            Key::Left => self.step(Movement::Left),
            Key::Right => self.step(Movement::Right),
            Key::Down => self.step(Movement::Down),
            Key::Up => self.step(Movement::Up),
            Key::Ctrl('s') => return self.apply_command(CommandId::FileSave),
            _ => {}
        }
        Vec::new()
    }

    /// One LEADER-mode keypress: step the trie, fire a binding, or fail
    /// the whole sequence with a status message naming it.
    fn handle_leader_key(&mut self, key: Key) -> Vec<Effect> {
        if key == Key::Escape {
            self.leader = None;
            self.mode = Mode::Normal;
            return Vec::new();
        }

        // Only character keys are trie tokens; everything else is inert.
        let Key::Char(c) = key else {
            return Vec::new();
        };
        let Some(node) = self.leader.as_ref().map(|state| state.node) else {
            self.mode = Mode::Normal;
            return Vec::new();
        };

        match node.child(c) {
            None => {
                let sequence = self.leader_sequence_display(c);
                self.leader = None;
                self.mode = Mode::Normal;
                self.set_status(format!("No binding: {sequence}"));
                Vec::new()
            }
            Some(child @ KeyNode::Group { .. }) => {
                if let Some(state) = self.leader.as_mut() {
                    state.keys.push(c);
                    state.node = child;
                }
                Vec::new()
            }
            Some(KeyNode::Binding { command, .. }) => {
                self.leader = None;
                self.mode = Mode::Normal;
                self.apply_command(*command)
            }
        }
    }

    /// `SPC f x` style rendering of the failed sequence, leader first.
    fn leader_sequence_display(&self, last: char) -> String {
        let marker = if self.leader_key == ' ' {
            "SPC".to_string()
        } else {
            self.leader_key.to_string()
        };
        let mut parts = vec![marker];
        if let Some(state) = &self.leader {
            parts.extend(state.keys.iter().map(char::to_string));
        }
        parts.push(last.to_string());
        parts.join(" ")
    }

    fn handle_palette_key(&mut self, key: Key) -> Vec<Effect> {
        let limit = self.palette_limit;
        match key {
            Key::Escape => {
                self.palette = None;
            }
            Key::Enter => return self.palette_confirm(),
            Key::Up => {
                if let Some(palette) = self.palette.as_mut() {
                    palette.select_prev();
                }
            }
            Key::Down => {
                if let Some(palette) = self.palette.as_mut() {
                    palette.select_next();
                }
            }
            Key::Backspace => {
                if let Some(palette) = self.palette.as_mut() {
                    palette.query.pop();
                    palette.refresh(limit);
                }
            }
            Key::Char(c) => {
                if let Some(palette) = self.palette.as_mut() {
                    palette.query.push(c);
                    palette.refresh(limit);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    /// Confirm the palette selection. Open-path entries and open-prefixed
    /// queries turn into a file-open request; otherwise the selection is
    /// matched against command titles. The palette closes either way.
    fn palette_confirm(&mut self) -> Vec<Effect> {
        let Some(palette) = self.palette.take() else {
            return Vec::new();
        };

        if let Some(label) = palette.selected_label() {
            if let Some(path) = path_suffix(label) {
                return vec![Effect::OpenFile(PathBuf::from(path))];
            }
            if let Some(path) = path_suffix(&palette.query) {
                return vec![Effect::OpenFile(PathBuf::from(path))];
            }
            if let Some(command) = command_by_title(label) {
                return self.apply_command(command);
            }
        } else if let Some(path) = path_suffix(&palette.query) {
            return vec![Effect::OpenFile(PathBuf::from(path))];
        }

        Vec::new()
    }

    pub fn open_palette(&mut self, prefill: &str) {
        self.palette = Some(PaletteState::open(prefill, self.palette_limit));
    }

    /// Central command dispatch. Exhaustive by construction: adding a
    /// command id without an arm here fails to compile.
    pub fn apply_command(&mut self, id: CommandId) -> Vec<Effect> {
        match id {
            CommandId::FileOpen => {
                self.open_palette(OPEN_PREFIX);
                Vec::new()
            }
            CommandId::FileSave => match &self.buffer.path {
                Some(path) => vec![Effect::SaveFile(path.clone())],
                None => {
                    self.set_status("No file path - use open to load a file");
                    Vec::new()
                }
            },
            CommandId::FileNew => {
                self.load_buffer(Buffer::new());
                self.set_status("New buffer");
                Vec::new()
            }
            CommandId::ToggleRelativeNumbers => {
                self.relative_numbers = !self.relative_numbers;
                let setting = if self.relative_numbers {
                    "relative"
                } else {
                    "absolute"
                };
                self.set_status(format!("Line numbers: {setting}"));
                vec![Effect::PersistSettings]
            }
            CommandId::PaletteOpen => {
                self.open_palette("");
                Vec::new()
            }
            CommandId::Quit => vec![Effect::Quit],
        }
    }

    fn step(&mut self, movement: Movement) {
        self.cursor = self.cursor.step(movement, &self.buffer);
    }

    /// Build the frame's render model. Also records the text-area height
    /// so event handling between draws clamps against the real window.
    pub fn render_model(&mut self, width: usize, height: usize) -> RenderModel {
        self.view_height = height;
        self.viewport.ensure_visible(height, self.cursor);

        let gutter_width = self.buffer.gutter_width();
        let text_width = width.saturating_sub(gutter_width);

        let start = self.viewport.scroll_top;
        let end = (start + height).min(self.buffer.line_count());

        let mut rows = Vec::with_capacity(end.saturating_sub(start));
        for row in start..end {
            let number = if row == self.cursor.row || !self.relative_numbers {
                row + 1
            } else {
                self.cursor.row.abs_diff(row)
            };
            rows.push(RenderRow {
                gutter: format!("{:>width$} ", number, width = gutter_width - 1),
                text: self.buffer.line(row).chars().take(text_width).collect(),
            });
        }

        let leader = self.leader.as_ref().map(|state| LeaderOverlay {
            title: state.node.title(),
            hints: state.node.hints(),
        });

        let cursor_x = (gutter_width + self.cursor.col).min(width.saturating_sub(1)) as u16;
        let cursor_y = self.cursor.row.saturating_sub(self.viewport.scroll_top) as u16;

        RenderModel {
            rows,
            status_left: self.status_left(),
            status_right: self.status_right(),
            leader,
            cursor: (cursor_x, cursor_y),
        }
    }

    fn status_left(&self) -> String {
        let dirty = if self.buffer.dirty { " [+]" } else { "" };
        let mut left = format!("{} | {}{}", self.mode_label(), self.buffer.name, dirty);
        if let Some(message) = &self.status {
            left.push_str(" | ");
            left.push_str(message);
        }
        left
    }

    fn status_right(&self) -> String {
        let mut right = format!("Ln {}, Col {}", self.cursor.row + 1, self.cursor.col + 1);
        if let Some(root) = &self.project_root {
            if let Some(name) = root.file_name().and_then(|n| n.to_str()) {
                right.push_str(" | ");
                right.push_str(name);
            }
        }
        right
    }
}

/// One visible row: the gutter label and the (truncated) line content.
/// Styling is the display layer's concern.
pub struct RenderRow {
    pub gutter: String,
    pub text: String,
}

/// The leader hint overlay: the current group's title and one hint per
/// child, in insertion order.
pub struct LeaderOverlay {
    pub title: &'static str,
    pub hints: Vec<Hint>,
}

/// Everything the display needs to paint one frame of the editor surface.
pub struct RenderModel {
    pub rows: Vec<RenderRow>,
    pub status_left: String,
    pub status_right: String,
    pub leader: Option<LeaderOverlay>,
    /// Terminal cursor target inside the text area, gutter included.
    pub cursor: (u16, u16),
}

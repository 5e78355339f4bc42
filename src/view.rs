//! Cursor and viewport model.
//!
//! The cursor is a `(row, col)` position in the buffer, the viewport a
//! vertical scroll offset over it. Neither is ever allowed to reject a
//! movement: everything is clamped after the fact, which keeps the mode
//! machine free of bounds checks.

use crate::buffer::Buffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A cursor movement request from the mode machine. The result is always
/// clamped by [`clamp_cursor`] afterwards, so the steps here only need to
/// avoid underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
}

impl Cursor {
    pub fn step(self, movement: Movement, buffer: &Buffer) -> Self {
        let Self { mut row, mut col } = self;

        match movement {
            Movement::Up => row = row.saturating_sub(1),
            Movement::Down => row += 1,
            Movement::Left => col = col.saturating_sub(1),
            Movement::Right => col += 1,
            Movement::LineStart => col = 0,
            Movement::LineEnd => col = buffer.line_len(row.min(buffer.line_count() - 1)),
        }

        Self { row, col }
    }
}

/// Clamp `cursor` against the buffer: row into `[0, line_count)`, then col
/// into `[0, line_len(row)]`. Pure; applied after every mutation.
pub fn clamp_cursor(buffer: &Buffer, cursor: Cursor) -> Cursor {
    let row = cursor.row.min(buffer.line_count() - 1);
    let col = cursor.col.min(buffer.line_len(row));
    Cursor { row, col }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_top: usize,
}

impl Viewport {
    /// Scroll so the cursor row is inside a window of `height` rows.
    /// Re-applied on every draw, which also covers terminal resizes.
    pub fn ensure_visible(&mut self, height: usize, cursor: Cursor) {
        if height == 0 {
            return;
        }
        if cursor.row < self.scroll_top {
            self.scroll_top = cursor.row;
        } else if cursor.row >= self.scroll_top + height {
            self.scroll_top = cursor.row - height + 1;
        }
    }
}

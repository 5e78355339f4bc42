//! # Text Buffer
//!
//! Core text buffer that represents a single document.
//!
//! ## What it does
//!
//! - Stores text as lines in memory (always at least one line)
//! - Normalizes CRLF line endings to LF on import
//! - Tracks whether the document has unsaved changes
//! - Exposes positional mutation primitives used by the mode machine
//!
//! ## Structure
//!
//! The buffer never performs I/O itself. The shell reads and writes files
//! and feeds text in through [`Buffer::from_text`] / [`Buffer::contents`],
//! which keeps every mutation here deterministic and testable.
//!
//! Columns are counted in characters, not bytes. Byte offsets are derived
//! internally so multi-byte characters cannot split a codepoint.

use std::path::PathBuf;

#[derive(Clone)]
pub struct Buffer {
    pub lines: Vec<String>,
    pub path: Option<PathBuf>,
    pub name: String,
    pub dirty: bool,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            path: None,
            name: String::from("untitled"),
            dirty: false,
        }
    }

    /// Build a buffer from raw file text. `\r\n` is normalized to `\n`
    /// before splitting; an empty document still gets one empty line.
    pub fn from_text(path: Option<PathBuf>, text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        let lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();

        let name = path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("untitled")
            .to_string();

        Self {
            lines: if lines.is_empty() {
                vec![String::new()]
            } else {
                lines
            },
            path,
            name,
            dirty: false,
        }
    }

    /// Join the line sequence with `\n`. No trailing newline is added
    /// beyond what the line list encodes, so `from_text` round-trips.
    pub fn contents(&self) -> String {
        let total: usize = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut result = String::with_capacity(total.saturating_sub(1));

        for (i, line) in self.lines.iter().enumerate() {
            result.push_str(line);
            if i < self.lines.len() - 1 {
                result.push('\n');
            }
        }

        result
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `row`, or `""` when `row` is out of range. Callers are
    /// expected to clamp through the cursor model first; the empty line is
    /// a safety net, not an API.
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// Length of the line at `row` in characters.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).chars().count()
    }

    /// Insert a single character at `(row, col)`. `col` is clamped to the
    /// line length before splicing.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        if row >= self.lines.len() {
            return;
        }
        let offset = byte_offset(&self.lines[row], col);
        self.lines[row].insert(offset, ch);
        self.dirty = true;
    }

    /// Split the line at `(row, col)` into two lines; `[col, end)` becomes a
    /// new line at `row + 1`. Returns the cursor position after the split.
    pub fn insert_newline(&mut self, row: usize, col: usize) -> (usize, usize) {
        if row >= self.lines.len() {
            return (row, col);
        }
        let offset = byte_offset(&self.lines[row], col);
        let tail = self.lines[row].split_off(offset);
        self.lines.insert(row + 1, tail);
        self.dirty = true;
        (row + 1, 0)
    }

    /// Delete the character before `(row, col)`. At column 0 the line is
    /// joined onto the previous one. `(0, 0)` is a no-op and does not mark
    /// the buffer dirty. Returns the cursor position after the edit.
    pub fn delete_char_backward(&mut self, row: usize, col: usize) -> (usize, usize) {
        if col > 0 {
            let offset = byte_offset(&self.lines[row], col - 1);
            self.lines[row].remove(offset);
            self.dirty = true;
            (row, col - 1)
        } else if row > 0 {
            let current = self.lines.remove(row);
            let prev_len = self.line_len(row - 1);
            self.lines[row - 1].push_str(&current);
            self.dirty = true;
            (row - 1, prev_len)
        } else {
            (0, 0)
        }
    }

    /// Delete the character at `(row, col)`. At end of line the next line
    /// is joined onto this one.
    pub fn delete_char_forward(&mut self, row: usize, col: usize) {
        if row >= self.lines.len() {
            return;
        }
        if col < self.line_len(row) {
            let offset = byte_offset(&self.lines[row], col);
            self.lines[row].remove(offset);
            self.dirty = true;
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Width of the gutter field for this buffer. Reserves at least 3
    /// digits so the layout does not shift while typing the first lines.
    pub fn gutter_width(&self) -> usize {
        let total_lines = self.lines.len().max(1);
        count_digits(total_lines).max(3) + 1 // +1 for spacing
    }
}

/// Byte offset of character index `col` in `line`, clamped to the end.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(offset, _)| offset)
}

fn count_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits
}

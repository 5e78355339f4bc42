//! Command palette state.
//!
//! The palette owns its query string and refilters synchronously on every
//! keystroke. Queries that look like paths (contain a separator or a dot)
//! get a synthetic, non-scored "open path" entry ahead of the ranked
//! command matches; confirming it opens the named file instead of running
//! a command.

use crate::commands::COMMANDS;
use crate::fuzzy::find_ranked;

/// Prefix of the synthetic open-path entry, and what the file-open
/// command prefills into the query. Both confirm paths share it.
pub const OPEN_PREFIX: &str = "open ";

pub struct PaletteState {
    pub query: String,
    pub items: Vec<String>,
    pub selected: usize,
}

impl PaletteState {
    /// Open the palette. The initial list always shows every command in
    /// registration order; a non-empty prefill is expected to be edited
    /// immediately, which refilters.
    pub fn open(prefill: &str, limit: usize) -> Self {
        let items = COMMANDS
            .iter()
            .take(limit)
            .map(|command| command.title.to_string())
            .collect();

        Self {
            query: prefill.to_string(),
            items,
            selected: 0,
        }
    }

    /// Recompute the ranked list for the current query.
    pub fn refresh(&mut self, limit: usize) {
        let ranked = find_ranked(&self.query, COMMANDS, |command| command.title, limit);
        let mut items: Vec<String> = ranked
            .into_iter()
            .map(|command| command.title.to_string())
            .collect();

        let trimmed = self.query.trim();
        if trimmed.contains(['/', '.']) {
            items.insert(0, path_label(trimmed));
        }

        self.items = items;
        self.selected = 0;
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    /// The label under the selection cursor, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

/// Label of the synthetic open-path entry for `trimmed` query text. A
/// query typed after the file-open prefill already carries the prefix.
fn path_label(trimmed: &str) -> String {
    if trimmed.starts_with(OPEN_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{OPEN_PREFIX}{trimmed}")
    }
}

/// Extract the path suffix from an open-path label or a prefilled query.
pub fn path_suffix(text: &str) -> Option<&str> {
    let suffix = text.trim().strip_prefix(OPEN_PREFIX)?.trim();
    if suffix.is_empty() {
        None
    } else {
        Some(suffix)
    }
}

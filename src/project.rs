//! Project-root detection.
//!
//! Walks upward from a starting directory looking for version-control
//! metadata. The result is display-only context for the status line.

use std::path::{Path, PathBuf};

const MARKERS: &[&str] = &[".git", ".hg", ".svn"];

/// The nearest ancestor of `start` (inclusive) containing a recognized
/// version-control marker directory, or `None` if the filesystem root is
/// reached without one.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| MARKERS.iter().any(|marker| dir.join(marker).is_dir()))
        .map(Path::to_path_buf)
}

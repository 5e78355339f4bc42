//! End-to-end tests through the application shell
//!
//! Exercises file open/save effects, error surfacing, and project-root
//! detection the way the run loop drives them

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use quill::editor::Effect;
use quill::keys::Key;
use quill::App;

#[tokio::test]
async fn test_app_creation() {
    let app = App::new();

    assert!(app.running);
    assert_eq!(app.editor.buffer.line_count(), 1);
    assert_eq!(app.editor.buffer.name, "untitled");
    assert!(app.editor.status.is_some()); // startup guidance message
}

#[tokio::test]
async fn test_open_missing_file_is_non_fatal() {
    let mut app = App::new();
    app.editor.handle_key(Key::Char('i'));
    app.editor.handle_key(Key::Char('z'));

    app.open_file(Path::new("/definitely/missing/file.txt")).await;

    let status = app.editor.status.as_deref().unwrap_or("");
    assert!(status.starts_with("File not found:"), "got: {status}");
    // Buffer untouched by the failed open.
    assert_eq!(app.editor.buffer.line(0), "z");
}

#[tokio::test]
async fn test_open_file_loads_lines_and_resets_cursor() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.txt");
    fs::write(&file_path, "Hello World\nSecond Line").unwrap();

    let mut app = App::new();
    app.editor.handle_key(Key::Char('j'));

    app.open_file(&file_path).await;

    assert_eq!(app.editor.buffer.name, "test.txt");
    assert_eq!(app.editor.buffer.line_count(), 2);
    assert_eq!(app.editor.buffer.line(0), "Hello World");
    assert_eq!(app.editor.buffer.line(1), "Second Line");
    assert!(!app.editor.buffer.dirty);
    assert_eq!((app.editor.cursor.row, app.editor.cursor.col), (0, 0));
    assert_eq!(app.editor.viewport.scroll_top, 0);
}

#[tokio::test]
async fn test_open_edit_save_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.txt");
    fs::write(&file_path, "Hello\nWorld").unwrap();

    let mut app = App::new();
    app.open_file(&file_path).await;

    app.editor.handle_key(Key::Char('i'));
    app.editor.handle_key(Key::Char('!'));
    assert!(app.editor.buffer.dirty);

    app.editor.handle_key(Key::Escape);
    let effects = app.editor.handle_key(Key::Ctrl('s'));
    assert_eq!(effects.len(), 1);
    app.perform(effects).await;

    assert!(!app.editor.buffer.dirty);
    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "!Hello\nWorld");
}

#[tokio::test]
async fn test_crlf_is_normalized_on_save() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("crlf.txt");
    fs::write(&file_path, "one\r\ntwo").unwrap();

    let mut app = App::new();
    app.open_file(&file_path).await;
    app.perform(vec![Effect::SaveFile(file_path.clone())]).await;

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "one\ntwo");
}

#[tokio::test]
async fn test_save_failure_keeps_buffer_dirty() {
    let mut app = App::new();
    app.editor.handle_key(Key::Char('i'));
    app.editor.handle_key(Key::Char('a'));
    assert!(app.editor.buffer.dirty);

    let bad_path = PathBuf::from("/definitely/missing/dir/out.txt");
    app.perform(vec![Effect::SaveFile(bad_path)]).await;

    assert!(app.editor.buffer.dirty);
    let status = app.editor.status.as_deref().unwrap_or("");
    assert!(status.starts_with("Error saving file:"), "got: {status}");
}

#[tokio::test]
async fn test_project_root_detected_on_open() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    let src_dir = temp_dir.path().join("src");
    fs::create_dir(&src_dir).unwrap();
    let file_path = src_dir.join("main.rs");
    fs::write(&file_path, "fn main() {}").unwrap();

    let mut app = App::new();
    app.open_file(&file_path).await;

    let root = app.editor.project_root.as_deref();
    assert_eq!(root, Some(temp_dir.path()));
}

#[tokio::test]
async fn test_project_root_absent_without_markers() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("plain.txt");
    fs::write(&file_path, "text").unwrap();

    let mut app = App::new();
    app.open_file(&file_path).await;

    // Whatever the tempdir's ancestors contain, they are outside the
    // tree we created; only assert nothing inside it matched.
    if let Some(root) = &app.editor.project_root {
        assert!(!root.starts_with(temp_dir.path()));
    }
}

#[tokio::test]
async fn test_quit_effect_stops_the_app() {
    let mut app = App::new();
    assert!(app.running);

    let effects = app.editor.handle_key(Key::Ctrl('c'));
    app.perform(effects).await;

    assert!(!app.running);
}

#[tokio::test]
async fn test_open_effect_from_palette_loads_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("notes.txt");
    fs::write(&file_path, "from the palette").unwrap();

    let mut app = App::new();
    app.editor.handle_key(Key::Char(':'));
    for c in file_path.to_str().unwrap().chars() {
        app.editor.handle_key(Key::Char(c));
    }
    let effects = app.editor.handle_key(Key::Enter);
    app.perform(effects).await;

    assert_eq!(app.editor.buffer.name, "notes.txt");
    assert_eq!(app.editor.buffer.line(0), "from the palette");
}

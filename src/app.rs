use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::event::{self, Event, KeyEventKind},
    Terminal,
};

use crate::buffer::Buffer;
use crate::config::ConfigManager;
use crate::editor::{Editor, Effect};
use crate::keys::Key;
use crate::project::find_project_root;
use crate::ui;

/// Application shell: owns the editor state, the config, and the event
/// loop. One key event is fully processed — state mutation, clamping,
/// any file I/O — before the next is read, so the core never sees
/// interleaved events.
pub struct App {
    /// Whether the application is running
    pub running: bool,

    /// The editor core
    pub editor: Editor,

    /// Persistent configuration
    pub config: ConfigManager,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quill");

        let mut config = ConfigManager::new(&config_dir);
        if let Err(e) = config.load() {
            eprintln!("Warning: could not load config: {}", e);
        }

        let mut editor = Editor::new();
        let settings = &config.get_config().editor;
        editor.leader_key = settings.leader_key;
        editor.relative_numbers = settings.relative_line_numbers;
        editor.palette_limit = settings.palette_limit;
        editor.set_status("Press the leader key for bindings, : for the command palette");

        Self {
            running: true,
            editor,
            config,
        }
    }

    /// Open `path` into the editor. Failures are recoverable: the current
    /// buffer is left untouched and the error becomes a status message.
    pub async fn open_file(&mut self, path: &Path) {
        let resolved = resolve_path(path);

        match tokio::fs::read_to_string(&resolved).await {
            Ok(text) => {
                self.editor
                    .load_buffer(Buffer::from_text(Some(resolved.clone()), &text));
                self.editor.project_root = resolved.parent().and_then(find_project_root);
                self.editor
                    .set_status(format!("Opened file: {}", resolved.display()));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.editor
                    .set_status(format!("File not found: {}", path.display()));
            }
            Err(e) => {
                self.editor.set_status(format!("Error opening file: {}", e));
            }
        }
    }

    /// Write the buffer to `path`. The dirty flag clears only on success.
    pub async fn save_file(&mut self, path: &Path) {
        match tokio::fs::write(path, self.editor.buffer.contents()).await {
            Ok(()) => {
                self.editor.buffer.dirty = false;
                self.editor
                    .set_status(format!("File saved: {}", path.display()));
            }
            Err(e) => {
                self.editor.set_status(format!("Error saving file: {}", e));
            }
        }
    }

    /// Perform the effects one key event requested, in order and to
    /// completion, before the next event is read.
    pub async fn perform(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenFile(path) => self.open_file(&path).await,
                Effect::SaveFile(path) => self.save_file(&path).await,
                Effect::PersistSettings => self.persist_settings(),
                Effect::Quit => self.running = false,
            }
        }
    }

    fn persist_settings(&mut self) {
        self.config.get_config_mut().editor.relative_line_numbers = self.editor.relative_numbers;
        if let Err(e) = self.config.save() {
            self.editor.set_status(format!("Error saving config: {}", e));
        }
    }

    /// Main event loop: poll input, feed the core, perform its effects,
    /// redraw at the target frame rate.
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let frame_duration = Duration::from_millis(16);
        let mut last_frame = Instant::now();

        terminal.draw(|f| ui::render(f, &mut self.editor))?;

        while self.running {
            if event::poll(Duration::from_millis(1))? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                        if let Some(key) = Key::from_event(key_event) {
                            let effects = self.editor.handle_key(key);
                            self.perform(effects).await;
                        }
                    }
                    Event::Resize(_, _) => {
                        // Next draw recomputes the layout and re-clamps
                        // the viewport.
                    }
                    _ => {}
                }
            } else {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }

            if last_frame.elapsed() >= frame_duration {
                terminal.draw(|f| ui::render(f, &mut self.editor))?;
                last_frame = Instant::now();
            }
        }

        Ok(())
    }
}

/// Resolve a possibly-relative path against the working directory.
fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

use ratatui::layout::Position;
use ratatui::prelude::*;

use crate::editor::Editor;
use crate::widgets::{EditorView, LeaderHints, PaletteModal, StatusBar};

/// Paint one frame. The core produces the render model; everything here
/// is styling and placement.
pub fn render(f: &mut Frame, editor: &mut Editor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Editor area
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    let model = editor.render_model(chunks[0].width as usize, chunks[0].height as usize);

    f.render_widget(EditorView::new(&model), chunks[0]);
    f.render_widget(StatusBar::new(&model.status_left, &model.status_right), chunks[1]);

    if let Some(palette) = &editor.palette {
        let modal = PaletteModal::new(palette);
        let cursor = modal.cursor_position(f.area());
        f.render_widget(modal, f.area());
        f.set_cursor_position(cursor);
    } else {
        if let Some(overlay) = &model.leader {
            f.render_widget(LeaderHints::new(overlay), f.area());
        }
        f.set_cursor_position(Position::new(
            chunks[0].x + model.cursor.0,
            chunks[0].y + model.cursor.1,
        ));
    }
}

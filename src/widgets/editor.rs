use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::editor::RenderModel;

/// Paints the visible rows of the render model: a dimmed gutter column
/// and the line content, with the cursor row's gutter highlighted.
pub struct EditorView<'a> {
    model: &'a RenderModel,
}

impl<'a> EditorView<'a> {
    pub fn new(model: &'a RenderModel) -> Self {
        Self { model }
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let cursor_row = self.model.cursor.1 as usize;

        let lines: Vec<Line> = self
            .model
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let gutter_style = if i == cursor_row {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Rgb(100, 100, 120))
                };
                Line::from(vec![
                    Span::styled(row.gutter.as_str(), gutter_style),
                    Span::raw(row.text.as_str()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(area, buf);
    }
}

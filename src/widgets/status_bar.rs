use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-row status bar: mode, file, and messages on the left; cursor
/// position and project context on the right.
pub struct StatusBar<'a> {
    left: &'a str,
    right: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(left: &'a str, right: &'a str) -> Self {
        Self { left, right }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let width = area.width as usize;

        let left: String = self.left.chars().take(width).collect();
        let left_len = left.chars().count();

        // The right side yields to the left when space runs out.
        let right: String = if self.right.chars().count() + left_len + 1 <= width {
            self.right.to_string()
        } else {
            String::new()
        };
        let pad = width.saturating_sub(left_len + right.chars().count());

        let line = Line::from(vec![
            Span::styled(
                left,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
            Span::styled(" ".repeat(pad), Style::default().bg(Color::DarkGray)),
            Span::styled(
                right,
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            ),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

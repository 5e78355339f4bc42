use ratatui::layout::Position;
use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::editor::LeaderOverlay;
use crate::palette::PaletteState;

/// Command palette modal with input and ranked suggestions.
pub struct PaletteModal<'a> {
    palette: &'a PaletteState,
}

impl<'a> PaletteModal<'a> {
    pub fn new(palette: &'a PaletteState) -> Self {
        Self { palette }
    }

    /// Centered area in the upper third of the screen.
    fn centered_rect(&self, area: Rect) -> Rect {
        let height = (self.palette.items.len() as u16 + 3).min(15); // +3 for input and borders
        let width = 80.min(area.width.saturating_sub(4));

        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(height)) / 3),
                Constraint::Length(height),
                Constraint::Min(0),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length((area.width.saturating_sub(width)) / 2),
                Constraint::Length(width),
                Constraint::Min(0),
            ])
            .split(popup_layout[1])[1]
    }

    /// Terminal cursor position at the end of the query input.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let modal_area = self.centered_rect(area);
        let inner_area = Block::default().borders(Borders::ALL).inner(modal_area);

        // Input is on the first inner line, after the "> " prompt.
        let query_len = self.palette.query.chars().count() as u16;
        Position::new(inner_area.x + 2 + query_len, inner_area.y)
    }
}

impl Widget for PaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let modal_area = self.centered_rect(area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(
                " Commands ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(0, 100, 200))
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Color::Rgb(0, 150, 255))
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(Color::Rgb(20, 20, 30)));

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);

        let input_line = Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.palette.query.as_str(),
                Style::default().fg(Color::White),
            ),
        ]);

        Paragraph::new(input_line)
            .style(Style::default().bg(Color::Rgb(30, 30, 50)))
            .render(chunks[0], buf);

        if !self.palette.items.is_empty() && chunks.len() > 1 {
            let item_lines: Vec<Line> = self
                .palette
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if i == self.palette.selected {
                        Line::from(Span::styled(
                            format!("  {} ", item),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(Span::styled(
                            format!("  {} ", item),
                            Style::default().fg(Color::LightBlue),
                        ))
                    }
                })
                .collect();

            Paragraph::new(item_lines).render(chunks[1], buf);
        }
    }
}

/// Overlay listing the current leader group's children: key, title, and
/// whether the child opens a further group.
pub struct LeaderHints<'a> {
    overlay: &'a LeaderOverlay,
}

impl<'a> LeaderHints<'a> {
    pub fn new(overlay: &'a LeaderOverlay) -> Self {
        Self { overlay }
    }

    fn centered_rect(&self, area: Rect) -> Rect {
        let height = (self.overlay.hints.len() as u16 + 2).min(area.height);
        let width = 44.min(area.width.saturating_sub(4));

        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height),
                Constraint::Length(1), // sit just above the status line
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length((area.width.saturating_sub(width)) / 2),
                Constraint::Length(width),
                Constraint::Min(0),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Widget for LeaderHints<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let modal_area = self.centered_rect(area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.overlay.title),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let hint_lines: Vec<Line> = self
            .overlay
            .hints
            .iter()
            .map(|hint| {
                let mut spans = vec![
                    Span::styled(
                        format!(" {} ", hint.key),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(hint.title, Style::default().fg(Color::White)),
                ];
                if hint.is_group {
                    spans.push(Span::styled(" ▸", Style::default().fg(Color::Gray)));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(hint_lines).render(inner_area, buf);
    }
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::draw::{DrawCommand, TextSlot, TileKind};
use crate::metrics::GameMetrics;

/// Paints a draw-command list into a terminal frame
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        commands: &[DrawCommand],
        grid_width: usize,
        grid_height: usize,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(commands, metrics);
        frame.render_widget(stats, chunks[0]);

        // Two terminal columns per cell keep the board roughly square
        let board_area = centered(
            chunks[1],
            clamp_u16(grid_width.saturating_mul(2).saturating_add(2)),
            clamp_u16(grid_height.saturating_add(2)),
        );
        let game_over = text_in(commands, TextSlot::GameOver);

        let grid = self.render_grid(commands, grid_width, grid_height, game_over.is_some());
        frame.render_widget(grid, board_area);

        if let Some(message) = game_over {
            let popup = centered(chunks[1], clamp_u16(message.chars().count() + 4), 4);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(message, metrics), popup);
        }

        let controls = self.render_controls(commands);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(
        &self,
        commands: &[DrawCommand],
        grid_width: usize,
        grid_height: usize,
        game_over: bool,
    ) -> Paragraph<'static> {
        let mut cells = vec![vec![None; grid_width]; grid_height];

        // Later commands paint over earlier ones
        for command in commands {
            if let DrawCommand::Tile { cell, kind } = command {
                if cell.is_within(grid_width, grid_height) {
                    cells[cell.y as usize][cell.x as usize] = Some(*kind);
                }
            }
        }

        let lines: Vec<Line> = cells
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(tile_span).collect::<Vec<_>>()))
            .collect();

        let border_color = if game_over { Color::Red } else { Color::White };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, commands: &[DrawCommand], metrics: &GameMetrics) -> Paragraph<'static> {
        let mut spans = Vec::new();

        for slot in [TextSlot::Score, TextSlot::Speed] {
            if let Some(text) = text_in(commands, slot) {
                spans.push(Span::styled(
                    text.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw("    "));
            }
        }

        spans.push(Span::styled("Time: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            metrics.format_time(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("    "));
        spans.push(Span::styled("Best: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            metrics.best_score.to_string(),
            Style::default().fg(Color::White),
        ));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, message: &str, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Games played: {}", metrics.games_played),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, commands: &[DrawCommand]) -> Paragraph<'static> {
        let controls = text_in(commands, TextSlot::Controls).unwrap_or_default();
        let text = vec![Line::from(vec![
            Span::styled(controls.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw(" | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn tile_span(tile: Option<TileKind>) -> Span<'static> {
    match tile {
        Some(TileKind::Head) => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Some(TileKind::Body) => Span::styled("□ ", Style::default().fg(Color::Green)),
        Some(TileKind::Food) => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

fn text_in(commands: &[DrawCommand], wanted: TextSlot) -> Option<&str> {
    commands.iter().find_map(|command| match command {
        DrawCommand::Text { slot, text } if *slot == wanted => Some(text.as_str()),
        _ => None,
    })
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

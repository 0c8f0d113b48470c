use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameSession, Position, GRID_SIZE, SEGMENT_CAPACITY};
use crate::matrix;
use crate::metrics::SessionStats;

pub struct PanelView;

impl PanelView {
    pub fn new() -> Self {
        Self
    }

    /// Draws what the LED panel is showing, with stats above and controls
    /// below. `image` is the integrated panel image for this display frame.
    pub fn render(
        &self,
        frame: &mut Frame,
        image: &matrix::Frame,
        session: &GameSession,
        stats: &SessionStats,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Panel area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let header = self.render_stats(chunks[0], session, stats);
        frame.render_widget(header, chunks[0]);

        // Center the panel horizontally
        let panel_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let panel = self.render_panel(panel_area, image);
        frame.render_widget(panel, panel_area);

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_panel(&self, _area: Rect, image: &matrix::Frame) -> Paragraph<'_> {
        let mut lines = Vec::new();

        // Every LED is the same color on the real panel, so lit cells all
        // look alike here too; snake and fruit are told apart by motion.
        for row in 0..GRID_SIZE {
            let mut spans = Vec::new();

            for col in 0..GRID_SIZE {
                let cell = if image.contains(Position::new(row as u8, col as u8)) {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        session: &GameSession,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", session.snake.len(), SEGMENT_CAPACITY),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Runs: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.runs.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for PanelView {
    fn default() -> Self {
        Self::new()
    }
}

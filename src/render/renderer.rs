use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, BorderType, Borders, Paragraph,
    },
};

use crate::game::{FrameSnapshot, SessionPhase};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Terminal region whose left click toggles pause; the settings cog
    /// is drawn here, in the top-right corner.
    pub fn cog_region(area: Rect) -> Rect {
        let width = 8.min(area.width);
        let height = 1.min(area.height);
        Rect::new(area.x + area.width.saturating_sub(width), area.y, width, height)
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &FrameSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot);
        frame.render_widget(stats, chunks[0]);

        let cog = Paragraph::new("[⚙]").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(cog, Self::cog_region(frame.area()));

        // Center the playfield horizontally
        let play_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.phase {
            SessionPhase::GameOver => {
                let game_over = self.render_game_over(snapshot);
                frame.render_widget(game_over, play_area);
            }
            SessionPhase::Paused => {
                let paused = self.render_paused();
                frame.render_widget(paused, play_area);
            }
            SessionPhase::Playing | SessionPhase::Countdown => {
                self.render_playfield(frame, play_area, snapshot);
                if let Some(count) = snapshot.countdown {
                    self.render_countdown(frame, play_area, count);
                }
            }
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Snake, food, and border, drawn in the grid's pixel space so body
    /// segments can sit between cells mid-interval.
    fn render_playfield(&self, frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
        let grid = snapshot.grid;
        let height = grid.pixel_height();
        let radius = (f64::from(grid.cell_size()) - 4.0) / 2.0;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, grid.pixel_width()])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                let (fx, fy) = grid.px_center(f64::from(snapshot.food.col), f64::from(snapshot.food.row));
                ctx.draw(&Circle {
                    x: fx,
                    y: height - fy,
                    radius,
                    color: Color::Red,
                });

                let centers: Vec<(f64, f64)> = snapshot
                    .segments
                    .iter()
                    .map(|seg| {
                        let (px, py) = grid.px_center(seg.col, seg.row);
                        (px, height - py)
                    })
                    .collect();

                // Fill the gaps between consecutive segments so the body
                // reads as one pill rather than beads.
                for pair in centers.windows(2) {
                    ctx.draw(&Circle {
                        x: (pair[0].0 + pair[1].0) / 2.0,
                        y: (pair[0].1 + pair[1].1) / 2.0,
                        radius,
                        color: Color::Green,
                    });
                }

                for (i, &(x, y)) in centers.iter().enumerate() {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius,
                        color: if i == 0 { Color::Cyan } else { Color::Green },
                    });
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_countdown(&self, frame: &mut Frame, area: Rect, count: u32) {
        let overlay = Rect::new(
            area.x + area.width.saturating_sub(5) / 2,
            area.y + area.height.saturating_sub(1) / 2,
            5.min(area.width),
            1.min(area.height),
        );
        let number = Paragraph::new(count.to_string())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(number, overlay);
    }

    fn render_stats(&self, snapshot: &FrameSnapshot) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.format_play_time(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_paused(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "P",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to resume", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_game_over(&self, snapshot: &FrameSnapshot) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
        ];

        if snapshot.score >= snapshot.high_score && snapshot.score > 0 {
            text.push(Line::from(Span::styled(
                "New high score!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(""));
        }

        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to replay or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
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

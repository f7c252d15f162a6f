use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameSession, SessionPhase};
use crate::input::{Command, InputHandler};
use crate::render::Renderer;
use crate::store::HighScoreStore;

/// The interactive terminal application: owns the session, pumps input,
/// advances one frame at a time, and draws.
pub struct App {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    store: HighScoreStore,
    should_quit: bool,
    score_recorded: bool,
}

impl App {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        let high_score = store.load();
        Self {
            session: GameSession::start(config, high_score),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            store,
            should_quit: false,
            score_recorded: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS; each frame runs at most one simulation tick,
        // so the logical rate stays pinned to the session's scheduler.
        let frame_interval = Duration::from_millis(33);
        let mut frame_timer = interval(frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        let size = terminal.size().context("Failed to query terminal size")?;
                        let area = Rect::new(0, 0, size.width, size.height);
                        self.handle_event(event, area);
                    }
                }

                // Advance the session and draw
                _ = frame_timer.tick() => {
                    self.session.frame();
                    self.persist_on_game_over()?;
                    let snapshot = self.session.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, area: Rect) {
        let command = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self
                .input_handler
                .handle_mouse_event(mouse, Renderer::cog_region(area)),
            _ => Command::None,
        };

        match command {
            Command::Steer(heading) => self.session.queue_direction(heading),
            Command::TogglePause => self.session.toggle_pause(),
            Command::Restart => {
                self.session.restart();
                self.score_recorded = false;
            }
            Command::Quit => self.should_quit = true,
            Command::None => {}
        }
    }

    /// Write the high score once per session, on entry to GameOver.
    fn persist_on_game_over(&mut self) -> Result<()> {
        if self.session.phase() == SessionPhase::GameOver && !self.score_recorded {
            self.store.record(self.session.score())?;
            self.score_recorded = true;
        }
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::driver::GameDriver;
use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction, KeyRemote};
use crate::metrics::SessionStats;
use crate::render::PanelView;
use crate::sim::SimPanel;

/// Interactive terminal play against the simulated panel.
pub struct PlayMode {
    driver: GameDriver<SimPanel, KeyRemote>,
    stats: SessionStats,
    view: PanelView,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };

        Self {
            driver: GameDriver::new(engine, SimPanel::new(), KeyRemote::new()),
            stats: SessionStats::new(),
            view: PanelView::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Park the panel lines and restore the terminal
        self.driver.blank();
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Pump the device loop every 2ms; physics pacing is the driver's
        // own 100ms accumulator, not this timer
        let pump_interval = Duration::from_millis(2);
        let mut pump_timer = interval(pump_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // One device loop iteration
                _ = pump_timer.tick() => {
                    // A game over set since the last pump is recorded here,
                    // right before the step that resets the session.
                    self.track_game_over();
                    self.driver.step();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    let image = self.driver.port_mut().snapshot();
                    terminal.draw(|frame| {
                        self.view.render(frame, &image, self.driver.session(), &self.stats);
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

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let action = self.input_handler.handle_key_event(key);

            match action {
                KeyAction::Remote(code) => {
                    self.driver.receiver_mut().press(code);
                }
                KeyAction::Restart => {
                    // Ends the run; the next pump records it and resets.
                    self.driver.session_mut().game_over = true;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn track_game_over(&mut self) {
        let session = self.driver.session();
        if session.game_over {
            self.stats.on_game_over(session.snake.score);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

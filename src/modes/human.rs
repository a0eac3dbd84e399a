use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameState, Intent, TickOutcome};
use crate::input::{InputHandler, IntentBuffer, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{self, Renderer};

/// Keyboard-driven game in the terminal
///
/// Every frame drains the keys pressed since the previous one into the game,
/// ticks it once and redraws. The game itself counts frames to decide when
/// the snake moves, so the frame rate sets the overall pace.
pub struct HumanMode {
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    input: IntentBuffer,
    frame_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(state: GameState, fps: u32) -> Self {
        let fps = fps.max(1);

        Self {
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            input: IntentBuffer::new(),
            frame_interval: Duration::from_secs(1) / fps,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal; the guard restores it on every way out of here
        enable_raw_mode().context("Failed to enable raw mode")?;
        let _restore = TerminalGuard::new(restore_terminal);
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        tracing::info!(frame_ms = self.frame_interval.as_millis() as u64, "starting game loop");

        let result = self.run_game_loop(&mut terminal).await;

        tracing::info!(
            games_played = self.metrics.games_played,
            best_score = self.metrics.best_score,
            "session finished"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One frame: input, update, draw
                _ = frame_timer.tick() => {
                    self.step();
                    self.metrics.update();
                    self.draw(terminal)?;
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

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Game(intent) => self.input.push(intent),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Intents gathered since the previous frame
    fn poll_input(&mut self) -> Vec<Intent> {
        self.input.take()
    }

    fn step(&mut self) -> TickOutcome {
        let intents = self.poll_input();
        let outcome = self.state.update(intents);

        match outcome {
            TickOutcome::Crashed(_) => self.metrics.on_game_over(self.state.score()),
            TickOutcome::Restarted => self.metrics.on_game_start(),
            _ => {}
        }

        outcome
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let snapshot = self.state.snapshot();
        let commands = render::render(&snapshot);

        terminal
            .draw(|frame| {
                self.renderer.render(
                    frame,
                    &commands,
                    snapshot.grid_width,
                    snapshot.grid_height,
                    &self.metrics,
                );
            })
            .context("Failed to draw frame")?;

        Ok(())
    }
}

/// Puts the terminal back into cooked mode when dropped
///
/// A failed restore is only logged, so it never hides the error that made
/// the game loop stop.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stderr(), LeaveAlternateScreen, Show)?;
    Ok(())
}

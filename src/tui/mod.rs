//! Terminal User Interface (TUI) for stillgrove.
//!
//! The full-screen focus timer and the guided breathing screens.
//! Built with ratatui and crossterm.
//!
//! The event loop is the tick source for both state machines: it polls for
//! input with a short timeout and fires `on_tick` once per elapsed second
//! against a monotonic deadline. The terminal is restored on every exit
//! path, which also stops the tick source before state is dropped.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::core::breathing::BreathingSequencer;
use crate::error::StillgroveError;

/// One tick per elapsed second.
const TICK_RATE: Duration = Duration::from_secs(1);

/// Outcome of a standalone breathing session.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreathingSummary {
    /// Requested session length in seconds.
    pub duration_seconds: u32,
    /// Full breathing cycles completed.
    pub cycles_completed: u32,
    /// Whether the session ran to its natural end.
    pub completed: bool,
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> Result<Tui, StillgroveError> {
    enable_raw_mode()
        .map_err(|e| StillgroveError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StillgroveError::Terminal(format!("Failed to setup terminal: {e}")))?;

    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| StillgroveError::Terminal(format!("Failed to create terminal: {e}")))
}

fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Run the focus timer.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), StillgroveError> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal);
    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), StillgroveError> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StillgroveError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::ToggleTimer => app.toggle_timer(),
                event::Action::ResetTimer => app.reset_timer(),
                event::Action::SwitchMode(mode) => app.switch_mode(mode),
                event::Action::OpenBreathing => app.open_breathing(),
                event::Action::CloseBreathing => app.close_breathing(),
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick += TICK_RATE;
        }
    }

    Ok(())
}

/// Run a standalone breathing session for the given length.
///
/// Returns a summary of the session once it completes or the user closes it.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run_breathing(total_seconds: u32) -> Result<BreathingSummary, StillgroveError> {
    let mut terminal = setup_terminal()?;

    let mut sequencer = BreathingSequencer::new(total_seconds);
    let result = run_breathing_loop(&mut terminal, &mut sequencer);

    restore_terminal(&mut terminal);

    let completed = result?;
    Ok(BreathingSummary {
        duration_seconds: total_seconds,
        cycles_completed: sequencer.cycle_count(),
        completed,
    })
}

/// Run the breathing session loop; returns whether it ran to completion.
fn run_breathing_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    sequencer: &mut BreathingSequencer,
) -> Result<bool, StillgroveError> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render_breathing_screen(frame, sequencer))
            .map_err(|e| StillgroveError::Terminal(format!("Failed to draw: {e}")))?;

        if event::breathing_close_requested()? {
            return Ok(false);
        }

        if last_tick.elapsed() >= TICK_RATE {
            if sequencer.tick() {
                return Ok(true);
            }
            last_tick += TICK_RATE;
        }
    }
}

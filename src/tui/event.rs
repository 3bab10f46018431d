//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::session::Mode;
use crate::error::StillgroveError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the session timer.
    ToggleTimer,
    /// Reset the current interval.
    ResetTimer,
    /// Switch the session timer to a mode.
    SwitchMode(Mode),
    /// Open the breathing overlay.
    OpenBreathing,
    /// Close the breathing overlay.
    CloseBreathing,
}

/// Handle terminal events for the focus timer.
///
/// Returns an action to take, or None if no action is needed. The poll
/// timeout keeps the loop responsive without burning the CPU between ticks.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, StillgroveError> {
    let Some(key) = poll_key()? else {
        return Ok(None);
    };

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    // While the overlay is open, keys only affect the overlay
    if app.breathing_open() {
        return Ok(match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'x' | 'b') => Some(Action::CloseBreathing),
            _ => None,
        });
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        // Timer controls
        KeyCode::Char(' ') | KeyCode::Enter => return Ok(Some(Action::ToggleTimer)),
        KeyCode::Char('r') => return Ok(Some(Action::ResetTimer)),

        // Mode switching
        KeyCode::Char('1' | 'f') => return Ok(Some(Action::SwitchMode(Mode::Focus))),
        KeyCode::Char('2' | 's') => return Ok(Some(Action::SwitchMode(Mode::ShortBreak))),
        KeyCode::Char('3' | 'l') => return Ok(Some(Action::SwitchMode(Mode::LongBreak))),

        // Breathing overlay
        KeyCode::Char('b') => return Ok(Some(Action::OpenBreathing)),

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "space:start/pause | r:reset | 1/2/3:mode | b:breathe | q:quit".to_string(),
            );
        }

        _ => {}
    }

    Ok(None)
}

/// Check for a close request on the standalone breathing screen.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn breathing_close_requested() -> Result<bool, StillgroveError> {
    let Some(key) = poll_key()? else {
        return Ok(false);
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    Ok(matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'x')))
}

/// Poll for a key press with a short timeout.
fn poll_key() -> Result<Option<event::KeyEvent>, StillgroveError> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| StillgroveError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| StillgroveError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

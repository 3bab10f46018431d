//! Application state for the TUI.
//!
//! Owns both state machines. The session timer lives for the whole run; the
//! breathing sequencer is mounted while the overlay is open and dropped when
//! it closes, so no tick can ever reach a torn-down machine. The two are
//! independent: the overlay never pauses the session countdown.

use crate::config::Config;
use crate::core::breathing::BreathingSequencer;
use crate::core::session::{Mode, SessionTimer};

/// Application state.
pub struct App {
    /// The Pomodoro session timer.
    pub timer: SessionTimer,
    /// The breathing overlay, when open.
    pub breathing: Option<BreathingSequencer>,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create the app from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            timer: SessionTimer::new(
                config.timer.durations(),
                config.timer.sessions_until_long_break,
            ),
            breathing: None,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Advance both machines by one second.
    pub fn on_tick(&mut self) {
        if let Some(sequencer) = self.breathing.as_mut() {
            if sequencer.tick() {
                let cycles = sequencer.cycle_count();
                self.breathing = None;
                self.status = Some(format!(
                    "Breathing session complete ({cycles} cycle{})",
                    if cycles == 1 { "" } else { "s" }
                ));
            }
        }

        if let Some(completion) = self.timer.tick() {
            self.status = Some(match completion.next {
                Mode::Focus => "Break over - ready to focus again".to_string(),
                Mode::ShortBreak => "Focus session complete - take a short break".to_string(),
                Mode::LongBreak => "Focus session complete - you earned a long break".to_string(),
            });
        }
    }

    /// Start or pause the session timer.
    pub fn toggle_timer(&mut self) {
        self.timer.toggle_running();
        self.status = Some(
            if self.timer.is_running() {
                format!("{} started", self.timer.mode())
            } else {
                "Paused".to_string()
            },
        );
    }

    /// Reset the current interval.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.status = Some(format!("{} reset", self.timer.mode()));
    }

    /// Switch the session timer to a mode.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.timer.switch_mode(mode);
        self.status = Some(format!("Switched to {mode}"));
    }

    /// Open the breathing overlay for the active break.
    ///
    /// Only available during breaks; the sequencer is created with the full
    /// duration of the active break mode.
    pub fn open_breathing(&mut self) {
        if !self.timer.mode().is_break() {
            self.status =
                Some("Breathing sessions go with breaks - switch to a break first".to_string());
            return;
        }

        self.breathing = Some(BreathingSequencer::new(self.timer.total_seconds()));
        self.status = None;
    }

    /// Close the breathing overlay immediately, whatever its phase.
    pub fn close_breathing(&mut self) {
        if self.breathing.take().is_some() {
            self.status = Some("Breathing session closed".to_string());
        }
    }

    /// Check whether the breathing overlay is open.
    #[must_use]
    pub const fn breathing_open(&self) -> bool {
        self.breathing.is_some()
    }
}

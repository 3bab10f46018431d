//! The Pomodoro session timer.
//!
//! A three-state countdown machine: Focus, ShortBreak, LongBreak. Completing
//! a Focus interval counts a session and rolls into a break (every Nth
//! completion a long one); completing any break rolls back into Focus.

use serde::{Deserialize, Serialize};

use crate::core::duration::format_clock;

/// The current interval type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Focused work interval
    Focus,
    /// Short recovery break
    ShortBreak,
    /// Long recovery break after a full cadence of focus sessions
    LongBreak,
}

impl Mode {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus Time",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Total interval lengths per mode, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Focus interval length
    pub focus: u32,
    /// Short break length
    pub short_break: u32,
    /// Long break length
    pub long_break: u32,
}

impl Durations {
    /// Look up the total duration for a mode.
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus: 25 * 60,
            short_break: 5 * 60,
            long_break: 15 * 60,
        }
    }
}

/// An interval completion, reported by [`SessionTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The mode that just finished.
    pub finished: Mode,
    /// The mode the timer switched to.
    pub next: Mode,
}

/// The Pomodoro session timer state machine.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    mode: Mode,
    durations: Durations,
    remaining_seconds: u32,
    is_running: bool,
    sessions_completed: u32,
    long_break_every: u32,
}

impl SessionTimer {
    /// Create a stopped timer in Focus mode at full duration.
    #[must_use]
    pub const fn new(durations: Durations, long_break_every: u32) -> Self {
        Self {
            mode: Mode::Focus,
            durations,
            remaining_seconds: durations.focus,
            is_running: false,
            sessions_completed: 0,
            long_break_every,
        }
    }

    /// Switch to a mode, resetting the countdown and stopping the timer.
    ///
    /// Any in-flight countdown is abandoned.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.remaining_seconds = self.durations.for_mode(mode);
        self.is_running = false;
    }

    /// Start or pause the countdown.
    ///
    /// Starting a finished timer behaves as a fresh start: the countdown
    /// refills to the mode's full duration first, so the timer never runs
    /// with zero remaining.
    pub fn toggle_running(&mut self) {
        if !self.is_running && self.remaining_seconds == 0 {
            self.remaining_seconds = self.durations.for_mode(self.mode);
        }
        self.is_running = !self.is_running;
    }

    /// Reset the countdown to the current mode's full duration and stop.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.durations.for_mode(self.mode);
        self.is_running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// Does nothing while paused. When the countdown hits zero the timer
    /// stops and rolls into the next interval: a completed Focus counts a
    /// session (every `long_break_every`th one is followed by a long break,
    /// otherwise a short one); a completed break is followed by Focus.
    ///
    /// Returns the completion when an interval just finished.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.is_running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        self.is_running = false;
        let finished = self.mode;
        let next = match finished {
            Mode::Focus => {
                self.sessions_completed += 1;
                if self.sessions_completed % self.long_break_every == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        };
        self.switch_mode(next);

        Some(Completion { finished, next })
    }

    /// Get the current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the remaining seconds in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Get the total seconds of the current mode's interval.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.durations.for_mode(self.mode)
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Get the number of completed focus sessions.
    #[must_use]
    pub const fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    /// How many focus sessions make up one cadence (until a long break).
    #[must_use]
    pub const fn long_break_every(&self) -> u32 {
        self.long_break_every
    }

    /// Get progress through the current interval (0.0 - 1.0).
    ///
    /// Computed on demand from the countdown, never stored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 1.0;
        }
        f64::from(total - self.remaining_seconds) / f64::from(total)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_timer() -> SessionTimer {
        SessionTimer::new(Durations::default(), 4)
    }

    /// Run the timer through one full interval in the current mode.
    fn complete_interval(timer: &mut SessionTimer) -> Completion {
        if !timer.is_running() {
            timer.toggle_running();
        }
        loop {
            if let Some(completion) = timer.tick() {
                return completion;
            }
        }
    }

    #[test]
    fn test_new_timer_is_stopped_focus() {
        let timer = default_timer();
        assert_eq!(timer.mode(), Mode::Focus);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.sessions_completed(), 0);
    }

    #[test]
    fn test_switch_mode_resets_and_stops() {
        for (mode, expected) in [
            (Mode::Focus, 1500),
            (Mode::ShortBreak, 300),
            (Mode::LongBreak, 900),
        ] {
            let mut timer = default_timer();
            timer.toggle_running();
            timer.tick();

            timer.switch_mode(mode);
            assert_eq!(timer.mode(), mode);
            assert_eq!(timer.remaining_seconds(), expected);
            assert!(!timer.is_running());
        }
    }

    #[test]
    fn test_tick_noop_while_paused() {
        let mut timer = default_timer();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_tick_never_negative() {
        let mut timer = SessionTimer::new(
            Durations {
                focus: 2,
                short_break: 2,
                long_break: 2,
            },
            4,
        );
        timer.toggle_running();
        for _ in 0..10 {
            timer.tick();
            // remaining_seconds is unsigned; completion refills it instead of
            // letting the countdown pass zero
            assert!(timer.remaining_seconds() <= 2);
        }
    }

    #[test]
    fn test_focus_completion_rolls_into_short_break() {
        let mut timer = default_timer();
        let completion = complete_interval(&mut timer);

        assert_eq!(completion.finished, Mode::Focus);
        assert_eq!(completion.next, Mode::ShortBreak);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());
        assert_eq!(timer.sessions_completed(), 1);
    }

    #[test]
    fn test_fourth_focus_completion_triggers_long_break() {
        let mut timer = default_timer();

        for expected_sessions in 1..=3 {
            let completion = complete_interval(&mut timer);
            assert_eq!(completion.next, Mode::ShortBreak);
            assert_eq!(timer.sessions_completed(), expected_sessions);

            let completion = complete_interval(&mut timer);
            assert_eq!(completion.finished, Mode::ShortBreak);
            assert_eq!(completion.next, Mode::Focus);
        }

        let completion = complete_interval(&mut timer);
        assert_eq!(timer.sessions_completed(), 4);
        assert_eq!(completion.next, Mode::LongBreak);
        assert_eq!(timer.mode(), Mode::LongBreak);
        assert_eq!(timer.remaining_seconds(), 900);
    }

    #[test]
    fn test_breaks_never_count_sessions() {
        let mut timer = default_timer();
        complete_interval(&mut timer);
        assert_eq!(timer.sessions_completed(), 1);

        // finish the short break
        let completion = complete_interval(&mut timer);
        assert_eq!(completion.finished, Mode::ShortBreak);
        assert_eq!(completion.next, Mode::Focus);
        assert_eq!(timer.sessions_completed(), 1);

        timer.switch_mode(Mode::LongBreak);
        let completion = complete_interval(&mut timer);
        assert_eq!(completion.finished, Mode::LongBreak);
        assert_eq!(completion.next, Mode::Focus);
        assert_eq!(timer.sessions_completed(), 1);
    }

    #[test]
    fn test_final_second_of_focus() {
        let mut timer = default_timer();
        timer.toggle_running();
        for _ in 0..1499 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.remaining_seconds(), 1);
        assert!(timer.is_running());

        let completion = timer.tick();
        assert!(completion.is_some());
        assert!(!timer.is_running());
        assert_eq!(timer.sessions_completed(), 1);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut timer = default_timer();
        timer.switch_mode(Mode::LongBreak);
        timer.toggle_running();
        for _ in 0..700 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 200);

        timer.reset();
        assert_eq!(timer.remaining_seconds(), 900);
        assert!(!timer.is_running());
        assert_eq!(timer.mode(), Mode::LongBreak);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut timer = default_timer();
        timer.toggle_running();
        assert!(timer.is_running());
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1499);

        timer.toggle_running();
        assert!(!timer.is_running());
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 1499);

        timer.toggle_running();
        assert!(timer.is_running());
    }

    #[test]
    fn test_start_at_zero_refills_to_full() {
        let mut timer = SessionTimer::new(
            Durations {
                focus: 3,
                short_break: 2,
                long_break: 2,
            },
            4,
        );
        // completion always refills the countdown, so zero the field
        // directly to exercise the guard
        timer.remaining_seconds = 0;
        timer.toggle_running();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 3);
    }

    #[test]
    fn test_progress() {
        let mut timer = SessionTimer::new(
            Durations {
                focus: 100,
                short_break: 10,
                long_break: 10,
            },
            4,
        );
        assert!((timer.progress() - 0.0).abs() < f64::EPSILON);

        timer.toggle_running();
        for _ in 0..50 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Focus.to_string(), "Focus Time");
        assert_eq!(Mode::ShortBreak.to_string(), "Short Break");
        assert_eq!(Mode::LongBreak.to_string(), "Long Break");
        assert!(!Mode::Focus.is_break());
        assert!(Mode::ShortBreak.is_break());
        assert!(Mode::LongBreak.is_break());
    }
}

//! The guided-breathing sequencer.
//!
//! A two-level countdown: an outer session countdown and an inner phase
//! cycle (inhale, hold, exhale, rest) on fixed per-phase durations. The
//! phase cycle keeps running regardless of the outer countdown; once the
//! outer countdown expires, a short grace period lets the final phase
//! settle before the sequencer signals its owner to close it.

use serde::{Deserialize, Serialize};

/// Seconds between the outer countdown expiring and the close signal.
const GRACE_SECONDS: u32 = 2;

/// One stage of the breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Breathe in (4 seconds)
    Inhale,
    /// Hold the breath (4 seconds)
    Hold,
    /// Breathe out (6 seconds)
    Exhale,
    /// Rest before the next breath (2 seconds)
    Rest,
}

impl Phase {
    /// Fixed duration of this phase in seconds.
    #[must_use]
    pub const fn duration_seconds(self) -> u32 {
        match self {
            Self::Inhale | Self::Hold => 4,
            Self::Exhale => 6,
            Self::Rest => 2,
        }
    }

    /// The phase that follows this one in the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Inhale => Self::Hold,
            Self::Hold => Self::Exhale,
            Self::Exhale => Self::Rest,
            Self::Rest => Self::Inhale,
        }
    }

    /// Get the guidance text shown for this phase.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inhale => "Breathe In",
            Self::Hold => "Hold",
            Self::Exhale => "Breathe Out",
            Self::Rest => "Rest",
        }
    }

    /// Whether the breathing circle is expanded during this phase.
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Inhale | Self::Hold)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The breathing session state machine.
#[derive(Debug, Clone)]
pub struct BreathingSequencer {
    total_seconds: u32,
    remaining_seconds: u32,
    phase: Phase,
    phase_remaining: u32,
    cycle_count: u32,
    grace_remaining: Option<u32>,
}

impl BreathingSequencer {
    /// Create a sequencer for a session of the given total length.
    #[must_use]
    pub const fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            phase: Phase::Inhale,
            phase_remaining: Phase::Inhale.duration_seconds(),
            cycle_count: 0,
            grace_remaining: None,
        }
    }

    /// Advance the sequencer by one second.
    ///
    /// The phase cycle advances on every tick, even after the outer countdown
    /// has expired. The tick that drains the outer countdown arms the grace
    /// period; returns `true` once the grace period has elapsed, signalling
    /// the owner to close the sequencer.
    pub fn tick(&mut self) -> bool {
        self.advance_phase();

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            if self.remaining_seconds == 0 {
                self.grace_remaining = Some(GRACE_SECONDS);
            }
            return false;
        }

        match self.grace_remaining.as_mut() {
            Some(grace) if *grace > 0 => {
                *grace -= 1;
                *grace == 0
            }
            // already signalled (or created with zero length); the owner
            // should have torn us down
            _ => true,
        }
    }

    fn advance_phase(&mut self) {
        self.phase_remaining = self.phase_remaining.saturating_sub(1);
        if self.phase_remaining == 0 {
            self.phase = self.phase.next();
            self.phase_remaining = self.phase.duration_seconds();
            if self.phase == Phase::Inhale {
                self.cycle_count += 1;
            }
        }
    }

    /// Get the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn phase_remaining(&self) -> u32 {
        self.phase_remaining
    }

    /// Seconds left in the whole session (floored at 0).
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Total length of the session in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Number of completed breathing cycles.
    #[must_use]
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    pub fn phase_progress(&self) -> f64 {
        let total = self.phase.duration_seconds();
        if total == 0 {
            return 1.0;
        }
        f64::from(total - self.phase_remaining) / f64::from(total)
    }

    /// Check whether the outer countdown has expired.
    #[must_use]
    pub const fn is_winding_down(&self) -> bool {
        self.remaining_seconds == 0
    }
}

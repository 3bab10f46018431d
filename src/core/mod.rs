//! Core timer state machines.
//!
//! Two independent, per-second tick-driven machines:
//! - [`session::SessionTimer`] - the Pomodoro work/break countdown
//! - [`breathing::BreathingSequencer`] - the guided-breathing phase cycle
//!
//! Neither machine owns a clock. `tick()` is called exactly once per elapsed
//! second by whatever drives the machine (the TUI event loop, or a test).

pub mod breathing;
pub mod duration;
pub mod session;

pub use breathing::{BreathingSequencer, Phase};
pub use duration::{format_clock, format_duration, parse_duration};
pub use session::{Durations, Mode, SessionTimer};

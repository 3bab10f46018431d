//! stillgrove - A calm Pomodoro focus timer for your terminal
//!
//! This crate provides a terminal focus timer with Pomodoro-style work/break
//! cadence and guided breathing sessions during breaks.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::breathing::{BreathingSequencer, Phase};
pub use crate::core::session::{Mode, SessionTimer};
pub use error::StillgroveError;

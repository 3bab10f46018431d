//! Configuration management for stillgrove.
//!
//! This module handles loading and saving configuration from `~/.stillgrove/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{BreathingConfig, ColorSetting, Config, GeneralConfig, TimerConfig};

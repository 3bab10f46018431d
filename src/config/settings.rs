//! Configuration settings for stillgrove.
//!
//! Settings are loaded from `~/.stillgrove/config.yaml`. Every setting has a
//! default, and a missing config file means defaults across the board; the
//! defaults reproduce the classic Pomodoro cadence (25/5/15 minutes, long
//! break every 4 sessions).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::session::Durations;
use crate::error::StillgroveError;

/// Longest configurable interval: one day.
const MAX_INTERVAL_MINUTES: u32 = 24 * 60;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session timer settings.
    pub timer: TimerConfig,
    /// Guided breathing settings.
    pub breathing: BreathingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the global colored-output switch.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Session timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus interval length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Number of focus sessions before a long break.
    #[serde(default = "default_sessions_until_long_break")]
    pub sessions_until_long_break: u32,
}

/// Guided breathing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BreathingConfig {
    /// Default standalone breathing session length in minutes.
    #[serde(default = "default_breathing_minutes")]
    pub default_minutes: u32,
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    25
}

const fn default_short_break_minutes() -> u32 {
    5
}

const fn default_long_break_minutes() -> u32 {
    15
}

const fn default_sessions_until_long_break() -> u32 {
    4
}

const fn default_breathing_minutes() -> u32 {
    5
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            sessions_until_long_break: default_sessions_until_long_break(),
        }
    }
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_breathing_minutes(),
        }
    }
}

impl TimerConfig {
    /// Interval lengths in seconds, for the session timer.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        Durations {
            focus: self.focus_minutes * 60,
            short_break: self.short_break_minutes * 60,
            long_break: self.long_break_minutes * 60,
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path over the default.
    ///
    /// A missing config file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, the file
    /// cannot be read, it fails to parse, or a value is out of range.
    pub fn load_or_default(path_override: Option<&Path>) -> Result<Self, StillgroveError> {
        match path_override {
            Some(path) => Self::load_from_path(path),
            None => Self::load_from_path(&Paths::new()?.config_file),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if a value is out of range.
    pub fn load_from_path(path: &Path) -> Result<Self, StillgroveError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write this configuration to a path as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to_path(&self, path: &Path) -> Result<(), StillgroveError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Check that every value is usable.
    ///
    /// Interval lengths must be positive so the timer can never run a
    /// zero-length countdown, and are capped at a day so minute values
    /// always convert to seconds without overflowing.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error naming the offending setting.
    pub fn validate(&self) -> Result<(), StillgroveError> {
        let minute_settings = [
            ("timer.focus_minutes", self.timer.focus_minutes),
            ("timer.short_break_minutes", self.timer.short_break_minutes),
            ("timer.long_break_minutes", self.timer.long_break_minutes),
            ("breathing.default_minutes", self.breathing.default_minutes),
        ];

        for (name, value) in minute_settings {
            if value == 0 {
                return Err(StillgroveError::Config(format!("{name} must be positive")));
            }
            if value > MAX_INTERVAL_MINUTES {
                return Err(StillgroveError::Config(format!(
                    "{name} must be at most {MAX_INTERVAL_MINUTES} minutes"
                )));
            }
        }

        if self.timer.sessions_until_long_break == 0 {
            return Err(StillgroveError::Config(
                "timer.sessions_until_long_break must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

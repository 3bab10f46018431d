//! Standalone guided breathing command implementation.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::duration::parse_duration;
use crate::error::StillgroveError;
use crate::output::format_breathing_summary;
use crate::tui;

/// Run a standalone breathing session and report how it went.
pub fn breathe(
    config: &Config,
    duration: Option<&str>,
    format: OutputFormat,
) -> Result<String, StillgroveError> {
    let total_seconds = match duration {
        Some(raw) => {
            let parsed = parse_duration(raw)
                .ok_or_else(|| StillgroveError::InvalidDuration(raw.to_string()))?;
            u32::try_from(parsed.num_seconds())
                .map_err(|_| StillgroveError::InvalidDuration(raw.to_string()))?
        }
        None => config.breathing.default_minutes * 60,
    };

    let summary = tui::run_breathing(total_seconds)?;
    format_breathing_summary(&summary, format)
}

//! Output formatting for stillgrove.
//!
//! Pretty (colored, human-readable) and JSON formatters for command results.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StillgroveError;
use crate::tui::BreathingSummary;

pub use json::to_json;
pub use pretty::{format_breathing_summary_pretty, format_config_pretty};

/// Format a breathing session summary based on output format.
///
/// # Errors
///
/// Returns a `Json` error if serialization fails.
pub fn format_breathing_summary(
    summary: &BreathingSummary,
    format: OutputFormat,
) -> Result<String, StillgroveError> {
    match format {
        OutputFormat::Pretty => Ok(format_breathing_summary_pretty(summary)),
        OutputFormat::Json => to_json(summary),
    }
}

//! Focus timer command implementation.

use crate::config::Config;
use crate::error::StillgroveError;
use crate::tui;

/// Launch the interactive focus timer.
pub fn timer(config: &Config) -> Result<String, StillgroveError> {
    tui::run(config)?;
    Ok(String::new())
}

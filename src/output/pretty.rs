//! Pretty (human-readable) output formatting.

use std::path::Path;

use chrono::Duration;
use colored::Colorize;

use crate::config::Config;
use crate::core::duration::format_duration;
use crate::tui::BreathingSummary;

/// Format the effective configuration as a readable listing.
pub fn format_config_pretty(config: &Config, path: &Path) -> String {
    let mut output = format!("{}\n", "stillgrove configuration".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {}\n",
        "Config file".dimmed(),
        path.display()
    ));
    output.push_str(&format!(
        "  {}: {} minutes\n",
        "Focus".dimmed(),
        config.timer.focus_minutes
    ));
    output.push_str(&format!(
        "  {}: {} minutes\n",
        "Short break".dimmed(),
        config.timer.short_break_minutes
    ));
    output.push_str(&format!(
        "  {}: {} minutes\n",
        "Long break".dimmed(),
        config.timer.long_break_minutes
    ));
    output.push_str(&format!(
        "  {}: every {} sessions\n",
        "Long break cadence".dimmed(),
        config.timer.sessions_until_long_break
    ));
    output.push_str(&format!(
        "  {}: {} minutes\n",
        "Breathing default".dimmed(),
        config.breathing.default_minutes
    ));

    output
}

/// Format a finished breathing session.
pub fn format_breathing_summary_pretty(summary: &BreathingSummary) -> String {
    let duration = format_duration(Duration::seconds(i64::from(summary.duration_seconds)));
    let cycles = summary.cycles_completed;
    let cycle_word = if cycles == 1 { "cycle" } else { "cycles" };

    if summary.completed {
        format!(
            "{} Breathing session complete: {} {} over {}",
            "✓".green(),
            cycles,
            cycle_word,
            duration
        )
    } else {
        format!(
            "{} Breathing session stopped early after {} {}",
            "•".yellow(),
            cycles,
            cycle_word
        )
    }
}

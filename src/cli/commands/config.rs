//! Config inspection and scaffolding commands.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::StillgroveError;
use crate::output::{format_config_pretty, to_json};

/// Resolve the config file path, honoring an explicit override.
fn resolve_path(path_override: Option<&Path>) -> Result<PathBuf, StillgroveError> {
    match path_override {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::new()?.config_file),
    }
}

/// Show the effective configuration.
pub fn config_show(
    config: &Config,
    path_override: Option<&Path>,
    format: OutputFormat,
) -> Result<String, StillgroveError> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Pretty => {
            let path = resolve_path(path_override)?;
            Ok(format_config_pretty(config, &path))
        }
    }
}

/// Write a default config file.
pub fn config_init(
    path_override: Option<&Path>,
    force: bool,
) -> Result<String, StillgroveError> {
    let path = resolve_path(path_override)?;

    if path.exists() && !force {
        return Err(StillgroveError::Config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if path_override.is_none() {
        Paths::new()?.ensure_dirs()?;
    } else if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Config::default().save_to_path(&path)?;

    Ok(format!(
        "{} Wrote default config to {}",
        "✓".green(),
        path.display()
    ))
}

/// Print the config file path.
pub fn config_path(path_override: Option<&Path>) -> Result<String, StillgroveError> {
    let path = resolve_path(path_override)?;
    Ok(path.display().to_string())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "stillgrove")]
#[command(about = "A calm Pomodoro focus timer with guided breathing for your terminal")]
#[command(long_about = "stillgrove - a calm Pomodoro focus timer for your terminal

Work in focused intervals with restorative breaks, following the classic
Pomodoro cadence: every fourth focus session earns a long break. During any
break you can open a guided breathing session that paces you through an
inhale / hold / exhale / rest rhythm.

QUICK START:
  stillgrove                Launch the focus timer
  stillgrove breathe        Run a standalone 5-minute breathing session
  stillgrove config init    Write a default config to ~/.stillgrove/

TIMER KEYS:
  space  start / pause      r  reset
  1/2/3  switch mode        b  breathing overlay (during breaks)
  q      quit

For more information on a specific command, run:
  stillgrove <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Path to the config file (defaults to ~/.stillgrove/config.yaml)
    #[arg(short, long, env = "STILLGROVE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive focus timer (the default)
    ///
    /// Runs the full-screen terminal timer. Switch between focus, short
    /// break, and long break modes; completed focus sessions roll into
    /// breaks automatically, and every fourth one earns a long break.
    ///
    /// # Examples
    ///
    ///   stillgrove            Same as 'stillgrove timer'
    ///   stillgrove timer      Launch explicitly
    #[command(alias = "t")]
    Timer,

    /// Run a standalone guided breathing session
    ///
    /// Paces you through the breathing rhythm (4s inhale, 4s hold,
    /// 6s exhale, 2s rest) for the given duration, then closes on its own.
    /// Press Esc or q to stop early.
    ///
    /// # Examples
    ///
    ///   stillgrove breathe             Use the configured default length
    ///   stillgrove breathe -d 10m      Breathe for ten minutes
    ///   stillgrove breathe -d 90s      A quick minute and a half
    #[command(alias = "b")]
    Breathe(BreatheArgs),

    /// Inspect or scaffold the configuration file
    Config(ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   stillgrove completions bash > /etc/bash_completion.d/stillgrove
    ///   stillgrove completions zsh > ~/.zfunc/_stillgrove
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the breathe command.
#[derive(Args)]
pub struct BreatheArgs {
    /// Session length, e.g. '5m', '90s', '1h' (defaults from config)
    #[arg(short, long)]
    pub duration: Option<String>,
}

/// Arguments for config subcommands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path
    Path,
}

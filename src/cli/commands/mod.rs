//! Subcommand implementations.
//!
//! Each command returns its output as a string; `main` prints it. Commands
//! that run the TUI return an empty string or a post-session summary.

mod breathe;
mod completions;
mod config;
mod timer;

pub use breathe::breathe;
pub use completions::completions;
pub use config::{config_init, config_path, config_show};
pub use timer::timer;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use stillgrove::cli::args::{Cli, Commands, ConfigCommands};
use stillgrove::cli::commands;
use stillgrove::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    // Commands that read the config load it here; `config init` and
    // `config path` must keep working when the existing file is broken,
    // so they never load it.
    let load = || -> Result<Config> {
        let config = Config::load_or_default(cli.config.as_deref())?;
        config.general.color.apply();
        Ok(config)
    };

    let output = match cli.command.unwrap_or(Commands::Timer) {
        Commands::Timer => commands::timer(&load()?)?,
        Commands::Breathe(args) => commands::breathe(&load()?, args.duration.as_deref(), format)?,
        Commands::Config(args) => match args.command {
            ConfigCommands::Show => {
                commands::config_show(&load()?, cli.config.as_deref(), format)?
            }
            ConfigCommands::Init { force } => commands::config_init(cli.config.as_deref(), force)?,
            ConfigCommands::Path => commands::config_path(cli.config.as_deref())?,
        },
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

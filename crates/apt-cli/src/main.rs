//! APT sources manager CLI
//!
//! Lists and edits the repository declarations under an APT configuration
//! root. Writes only ever touch the managed fragment file.

mod cli;
mod commands;
mod error;
mod logging;
mod settings;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::load(&cli)?.merge_cli(&cli);
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        Some(cmd) => execute_command(cmd, &settings),
        None => {
            println!("{} APT sources manager", "apt-sources".green().bold());
            println!();
            println!("Run {} for available commands.", "apt-sources --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::List { json, enabled_only } => {
            commands::run_list(&settings.sources()?, json, enabled_only)
        }
        Commands::Add { line } => commands::run_add(&settings.sources()?, &line),
        Commands::Remove { line } => commands::run_remove(&settings.sources()?, &line),
        Commands::Edit { old, new } => commands::run_edit(&settings.sources()?, &old, &new),
        Commands::Paths => commands::run_paths(&settings.layout()?),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "apt-sources", &mut std::io::stdout());
            Ok(())
        }
    }
}

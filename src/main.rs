// Binary entry point - import modules directly
mod cli;
mod commands;
mod config;
mod core;
mod session;
mod store;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    // No subcommand drops into the interactive session
    let command = cli.command.unwrap_or(Commands::Interactive);
    command.execute(config).await?;

    Ok(())
}

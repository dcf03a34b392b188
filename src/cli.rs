use crate::commands::{configure, generate, init, interactive, show, topics};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotegen")]
#[command(about = "Inspirational quotes for any topic, from your terminal")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate up to three random quotes for a topic
    Generate(GenerateArgs),

    /// Start an interactive quote session
    Interactive,

    /// List available topics
    Topics,

    /// Show every quote stored under a topic
    Show(ShowArgs),

    /// Seed the quotes file with the built-in collection
    Init(InitArgs),

    /// Configuration management
    Config(ConfigArgs),
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Generate(args) => {
                generate::handle_generate_command(config, &args).await?;
            }
            Commands::Interactive => {
                interactive::handle_interactive_command(config).await?;
            }
            Commands::Topics => {
                topics::handle_topics_command(config).await?;
            }
            Commands::Show(args) => {
                show::handle_show_command(config, &args).await?;
            }
            Commands::Init(args) => {
                init::handle_init_command(config, &args)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(help = "Topic to find quotes for (e.g. success, motivation, dreams)")]
    pub topic: Option<String>,

    #[arg(long, help = "Skip the artificial delay before showing results")]
    pub no_delay: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Topic key, or any text that matches one")]
    pub topic: String,
}

#[derive(Args)]
pub struct InitArgs {
    #[arg(short, long, help = "Overwrite an existing quotes file")]
    pub force: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

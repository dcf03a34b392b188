use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils;
use anyhow::Result;

pub fn handle_config_command(mut config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(),
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  Quotegen Configuration");
    println!("==========================");

    println!("General:");
    println!("  Quotes file: {}", config.general.quotes_file.display());
    if let Some(url) = &config.general.quotes_url {
        println!("  Quotes URL: {}", url);
    }
    println!("  Delay (ms): {}", config.general.delay_ms);
    println!("  Color: {}", config.general.color);

    Ok(())
}

fn handle_path_command() -> Result<()> {
    println!("{}", Config::config_file_path().display());
    Ok(())
}

fn handle_config_help() -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  quotegen config show    - Show current configuration");
    println!("  quotegen config path    - Print the configuration file path");
    println!("  quotegen config reset   - Reset configuration to defaults");
    println!();
    println!(
        "Configuration file location: {}",
        Config::config_file_path().display()
    );
    Ok(())
}

fn handle_reset_command(config: &mut Config) -> Result<()> {
    if utils::prompt_yes_no(
        "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
    )? {
        *config = Config::default();
        config.save()?;
        println!("✓ Configuration reset to defaults!");
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}

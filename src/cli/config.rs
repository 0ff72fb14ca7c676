//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set a configuration value
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Key to set (ui.theme_mode, ui.show_help_on_startup, profile.display_name, profile.sun_sign)
    #[arg(value_name = "KEY")]
    key: String,

    /// New value (empty string clears profile fields)
    #[arg(value_name = "VALUE")]
    value: String,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    ui: UiOutput,
    profile: ProfileOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct ProfileOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sun_sign: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let config_file = Config::config_file_path()
            .map(|p| p.display().to_string())
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        if self.json {
            let output = ConfigOutput {
                config_file,
                ui: UiOutput {
                    theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
                    show_help_on_startup: config.ui.show_help_on_startup,
                },
                profile: ProfileOutput {
                    display_name: config.profile.display_name.clone(),
                    sun_sign: config.profile.sun_sign.clone(),
                },
            };
            return print_json(&output);
        }

        println!("Mystic Catalog Configuration");
        println!("============================");
        println!();
        println!("File: {config_file}");
        println!();
        println!("UI:");
        println!(
            "  Theme Mode: {}",
            format!("{:?}", config.ui.theme_mode).to_lowercase()
        );
        println!("  Show Help On Startup: {}", config.ui.show_help_on_startup);
        println!();
        println!("Profile:");
        println!(
            "  Display Name: {}",
            config.profile.display_name.as_deref().unwrap_or("(not set)")
        );
        println!(
            "  Sun Sign: {}",
            config.profile.sun_sign.as_deref().unwrap_or("(not set)")
        );

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        config
            .set_value(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

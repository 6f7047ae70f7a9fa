//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
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
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme identifier (stock, Catppuccin, or "dynamic")
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    mode: &'static str,
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
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;
        let config_file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {}", e)))?;

        let output = ConfigOutput {
            config_file: config_file.to_string_lossy().to_string(),
            ui: UiOutput {
                theme: config.ui.theme.clone(),
                mode: config.ui.theme_mode.as_str(),
            },
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("Shell Themes Configuration");
            println!("==========================");
            println!();
            println!("File: {}", output.config_file);
            println!();
            println!("UI:");
            println!("  Theme: {}", output.ui.theme);
            println!("  Theme Mode: {}", output.ui.mode);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none() && self.mode.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme or --mode",
            ));
        }

        // A file that exists but can't be loaded is left alone
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;

        if let Some(theme) = &self.theme {
            config
                .set_theme(theme)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(mode) = &self.mode {
            config.ui.theme_mode = parse_theme_mode(mode)?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn parse_theme_mode(mode: &str) -> CliResult<ThemeMode> {
    match mode.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(CliError::validation(
            "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
        )),
    }
}

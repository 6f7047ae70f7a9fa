//! `current` command: resolve the configured theme.

use std::io::IsTerminal;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::show::{print_palette, unknown_variant};
use crate::config::Config;
use clap::Args;
use tracing::debug;

/// Show the palette selected in the configuration
#[derive(Debug, Clone, Args)]
pub struct CurrentArgs {
    /// Output the palette as JSON
    #[arg(long)]
    pub json: bool,
}

impl CurrentArgs {
    /// Execute the current command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;

        let (variant, palette) = config.current_palette();
        debug!(
            "Resolved mode {:?} to {:?} for theme '{}'",
            config.ui.theme_mode, variant, config.ui.theme
        );
        let palette = palette.ok_or_else(|| unknown_variant(&config.ui.theme))?;

        if self.json {
            print_json(&palette)
        } else {
            print_palette(&palette, std::io::stdout().is_terminal());
            Ok(())
        }
    }
}

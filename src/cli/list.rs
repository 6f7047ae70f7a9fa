//! `list` command: print theme identifiers and display names.

use crate::catalog;
use crate::cli::common::{print_json, CliResult};
use crate::models::ThemeVariant;
use clap::Args;
use serde::Serialize;

/// List available themes
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Show light-mode display names
    #[arg(long)]
    pub light: bool,

    /// List Catppuccin variants instead of stock themes
    #[arg(long)]
    pub catppuccin: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ThemeItem {
    id: &'static str,
    name: String,
}

#[derive(Debug, Serialize)]
struct ListThemesResponse {
    mode: ThemeVariant,
    themes: Vec<ThemeItem>,
    count: usize,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let response = self.build_response();

        if self.json {
            print_json(&response)?;
        } else {
            let kind = if self.catppuccin { "Catppuccin variants" } else { "Stock themes" };
            println!("{} ({}):", kind, response.count);
            println!();
            for theme in response.themes {
                println!("  {:<20} {}", theme.id, theme.name);
            }
        }

        Ok(())
    }

    fn build_response(&self) -> ListThemesResponse {
        let variant = ThemeVariant::from_is_light(self.light);

        let themes: Vec<ThemeItem> = if self.catppuccin {
            catalog::catppuccin::variants()
                .iter()
                .map(|v| ThemeItem {
                    id: v.id,
                    name: v.display_name(variant),
                })
                .collect()
        } else {
            catalog::available_themes(variant)
                .iter()
                .map(|(id, palette)| ThemeItem {
                    id,
                    name: palette.name.to_string(),
                })
                .collect()
        };

        ListThemesResponse {
            mode: variant,
            count: themes.len(),
            themes,
        }
    }
}

//! `show` command: print one resolved palette.

use std::io::IsTerminal;

use crossterm::style::{Color, StyledContent, Stylize};

use crate::catalog;
use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{ColorPalette, RgbColor, ThemeVariant};
use clap::Args;

/// Show the colours of a theme
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Theme identifier (e.g. "blue", "cat-mauve")
    #[arg(value_name = "ID")]
    pub id: String,

    /// Resolve the light-mode palette
    #[arg(long)]
    pub light: bool,

    /// Output the palette as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let variant = ThemeVariant::from_is_light(self.light);
        let palette = resolve(&self.id, variant)?;

        if self.json {
            print_json(&palette)
        } else {
            print_palette(&palette, std::io::stdout().is_terminal());
            Ok(())
        }
    }
}

/// Looks up `id`, turning a Catppuccin miss into a validation error.
pub fn resolve(id: &str, variant: ThemeVariant) -> CliResult<ColorPalette> {
    catalog::theme_by_name(id, variant).ok_or_else(|| unknown_variant(id))
}

/// Error reported for a Catppuccin identifier missing from the catalog.
pub fn unknown_variant(id: &str) -> CliError {
    CliError::validation(format!(
        "Unknown Catppuccin variant: '{}'\n\nRun 'shell-themes list --catppuccin' to see available variants.",
        id
    ))
}

/// Prints a palette as a role table, with truecolor swatches when `swatches` is set.
pub fn print_palette(palette: &ColorPalette, swatches: bool) {
    println!("{}", palette.name);
    println!("{}", "=".repeat(palette.name.len()));
    println!();

    for (role, hex) in palette.roles() {
        let rgb = RgbColor::from_hex(hex).ok();
        let swatch = match rgb {
            Some(c) if swatches => format!("{} ", swatch(c)),
            _ => String::new(),
        };
        let rgb_text = rgb.map(|c| c.to_string()).unwrap_or_default();
        println!("  {}{:<22} {:<9} {}", swatch, role, hex, rgb_text);
    }

    if let Some(kind) = palette.matugen_type {
        println!();
        println!("  matugen type: {}", kind);
    }
}

/// A four-cell block filled with `color`.
fn swatch(color: RgbColor) -> StyledContent<&'static str> {
    "    ".on(Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stock_fallback() {
        let palette = resolve("missing", ThemeVariant::Dark).unwrap();
        assert_eq!(palette.name, "Blue");
    }

    #[test]
    fn test_resolve_catppuccin_miss_is_validation_error() {
        let err = resolve("cat-missing", ThemeVariant::Dark).unwrap_err();
        assert_eq!(err.exit_code, crate::cli::ExitCode::ValidationError);
        assert!(err.message.contains("cat-missing"));
    }

    #[test]
    fn test_swatch_background_is_role_colour() {
        let block = swatch(RgbColor::new(0xcb, 0xa6, 0xf7));
        assert_eq!(*block.content(), "    ");
        assert_eq!(
            block.style().background_color,
            Some(Color::Rgb {
                r: 0xcb,
                g: 0xa6,
                b: 0xf7
            })
        );
        assert_eq!(block.style().foreground_color, None);
    }
}

//! Binds catalog palettes to Ratatui colours.
//!
//! Terminal front ends work with [`Theme`], which is a [`ColorPalette`] whose
//! roles have been parsed into `ratatui::style::Color` values once.

use anyhow::{Context, Result};
use ratatui::style::Color;

use crate::catalog;
use crate::config::Config;
use crate::models::{ColorPalette, ThemeVariant};

/// Semantic color theme for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Display name of the palette this theme was built from
    pub name: String,
    /// Mode the palette was authored for
    pub variant: ThemeVariant,

    // Accents
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Text drawn on primary-filled elements
    pub on_primary: Color,
    /// Secondary accent for highlights and selections
    pub accent: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text and borders
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Surface color for panels
    pub surface: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
}

impl Theme {
    /// Builds a theme from a palette.
    ///
    /// # Errors
    ///
    /// Returns an error if any role used here is not valid hex.
    pub fn from_palette(palette: &ColorPalette, variant: ThemeVariant) -> Result<Self> {
        let color = |role: &str| -> Result<Color> { Ok(palette.rgb(role)?.to_ratatui_color()) };

        Ok(Self {
            name: palette.name.to_string(),
            variant,
            primary: color("primary")?,
            on_primary: color("primaryText")?,
            accent: color("secondary")?,
            text: color("backgroundText")?,
            text_secondary: color("surfaceVariantText")?,
            text_muted: color("outline")?,
            background: color("background")?,
            surface: color("surfaceContainer")?,
            highlight_bg: color("surfaceContainerHigh")?,
        })
    }

    /// Builds the theme for a catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown Catppuccin identifier. Other unknown
    /// identifiers resolve to the blue fallback like any catalog lookup.
    pub fn by_name(id: &str, variant: ThemeVariant) -> Result<Self> {
        let palette = catalog::theme_by_name(id, variant)
            .with_context(|| format!("Unknown Catppuccin variant '{id}'"))?;
        Self::from_palette(&palette, variant)
    }

    /// Builds the theme selected in the user's configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::by_name(&config.ui.theme, config.ui.theme_mode.resolve())
    }
}

impl Default for Theme {
    fn default() -> Self {
        let palette = catalog::theme_by_name(catalog::FALLBACK_THEME, ThemeVariant::Dark);
        palette
            .and_then(|p| Self::from_palette(&p, ThemeVariant::Dark).ok())
            .unwrap_or_else(|| Self {
                name: String::from("Blue"),
                variant: ThemeVariant::Dark,
                primary: Color::Cyan,
                on_primary: Color::Black,
                accent: Color::Yellow,
                text: Color::White,
                text_secondary: Color::Gray,
                text_muted: Color::DarkGray,
                background: Color::Black,
                surface: Color::Rgb(30, 30, 30),
                highlight_bg: Color::DarkGray,
            })
    }
}

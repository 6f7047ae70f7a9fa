//! Colour palette records shared by every theme in the catalog.
//!
//! A [`ColorPalette`] is the fixed set of colour roles one theme assigns in
//! one mode. The set of role names is what the shell's rendering layer binds
//! to, so the serialized field names must stay stable.

use std::borrow::Cow;

use anyhow::{Context, Result};
use serde::Serialize;

use super::RgbColor;

/// Dark or light rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Palette tuned for dark backgrounds
    #[default]
    Dark,
    /// Palette tuned for light backgrounds
    Light,
}

impl ThemeVariant {
    /// Maps the shell's `isLight` flag onto a variant.
    #[must_use]
    pub const fn from_is_light(is_light: bool) -> Self {
        if is_light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Returns true for [`ThemeVariant::Light`].
    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Detects the OS colour scheme.
    ///
    /// Uses the `dark-light` crate; anything other than an explicit light
    /// answer (including detection errors) resolves to dark.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::Light,
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::Dark,
        }
    }
}

/// One theme's colour role assignments for one mode.
///
/// Every colour is a `#rrggbb` hex string. Palettes in the catalog are
/// `'static` constants; derived palettes only own their `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Human-readable theme name ("Blue", "Mauve Light", ...)
    pub name: Cow<'static, str>,
    /// Primary accent colour
    pub primary: &'static str,
    /// Text drawn on top of `primary`
    pub primary_text: &'static str,
    /// Container tinted with the primary colour
    pub primary_container: &'static str,
    /// Secondary accent colour
    pub secondary: &'static str,
    /// Default surface colour
    pub surface: &'static str,
    /// Text drawn on `surface`
    pub surface_text: &'static str,
    /// Alternate surface colour
    pub surface_variant: &'static str,
    /// Text drawn on `surface_variant`
    pub surface_variant_text: &'static str,
    /// Tint applied to elevated surfaces
    pub surface_tint: &'static str,
    /// Window background
    pub background: &'static str,
    /// Text drawn on `background`
    pub background_text: &'static str,
    /// Borders and dividers
    pub outline: &'static str,
    /// Container surface
    pub surface_container: &'static str,
    /// Raised container surface
    pub surface_container_high: &'static str,
    /// Scheme hint for the external matugen generator, if any
    #[serde(rename = "matugen_type", skip_serializing_if = "Option::is_none")]
    pub matugen_type: Option<&'static str>,
}

/// The nine surface roles shared by every Catppuccin variant of one flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColors {
    /// Default surface colour
    pub surface: &'static str,
    /// Text drawn on `surface`
    pub surface_text: &'static str,
    /// Alternate surface colour
    pub surface_variant: &'static str,
    /// Text drawn on `surface_variant`
    pub surface_variant_text: &'static str,
    /// Window background
    pub background: &'static str,
    /// Text drawn on `background`
    pub background_text: &'static str,
    /// Borders and dividers
    pub outline: &'static str,
    /// Container surface
    pub surface_container: &'static str,
    /// Raised container surface
    pub surface_container_high: &'static str,
}

/// The five accent roles a Catppuccin variant contributes for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColors {
    /// Primary accent colour
    pub primary: &'static str,
    /// Secondary accent colour
    pub secondary: &'static str,
    /// Text drawn on top of `primary`
    pub primary_text: &'static str,
    /// Container tinted with the primary colour
    pub primary_container: &'static str,
    /// Tint applied to elevated surfaces
    pub surface_tint: &'static str,
}

impl ColorPalette {
    /// Builds a palette by overlaying `accent` on `base`.
    ///
    /// Precedence is fixed: surface roles come from `base`, every accent role
    /// comes from `accent`, and `name` is assigned last.
    #[must_use]
    pub fn merged(base: &BaseColors, accent: &AccentColors, name: impl Into<Cow<'static, str>>) -> Self {
        let mut palette = Self {
            name: Cow::Borrowed(""),
            primary: accent.primary,
            primary_text: accent.primary_text,
            primary_container: accent.primary_container,
            secondary: accent.secondary,
            surface: base.surface,
            surface_text: base.surface_text,
            surface_variant: base.surface_variant,
            surface_variant_text: base.surface_variant_text,
            surface_tint: accent.surface_tint,
            background: base.background,
            background_text: base.background_text,
            outline: base.outline,
            surface_container: base.surface_container,
            surface_container_high: base.surface_container_high,
            matugen_type: None,
        };
        palette.name = name.into();
        palette
    }

    /// Returns every colour role as `(wire name, hex)` pairs in declaration order.
    pub fn roles(&self) -> [(&'static str, &'static str); 14] {
        [
            ("primary", self.primary),
            ("primaryText", self.primary_text),
            ("primaryContainer", self.primary_container),
            ("secondary", self.secondary),
            ("surface", self.surface),
            ("surfaceText", self.surface_text),
            ("surfaceVariant", self.surface_variant),
            ("surfaceVariantText", self.surface_variant_text),
            ("surfaceTint", self.surface_tint),
            ("background", self.background),
            ("backgroundText", self.background_text),
            ("outline", self.outline),
            ("surfaceContainer", self.surface_container),
            ("surfaceContainerHigh", self.surface_container_high),
        ]
    }

    /// Looks up a single role by its wire name.
    pub fn role(&self, role: &str) -> Option<&'static str> {
        self.roles()
            .into_iter()
            .find(|(name, _)| *name == role)
            .map(|(_, hex)| hex)
    }

    /// Parses a role's hex value.
    ///
    /// # Errors
    ///
    /// Returns an error if the role is unknown or its value is not valid hex.
    pub fn rgb(&self, role: &str) -> Result<RgbColor> {
        let hex = self
            .role(role)
            .with_context(|| format!("Unknown colour role '{role}'"))?;
        RgbColor::from_hex(hex).with_context(|| format!("Invalid colour for role '{role}' in theme '{}'", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: BaseColors = BaseColors {
        surface: "#111111",
        surface_text: "#222222",
        surface_variant: "#333333",
        surface_variant_text: "#444444",
        background: "#555555",
        background_text: "#666666",
        outline: "#777777",
        surface_container: "#888888",
        surface_container_high: "#999999",
    };

    const ACCENT: AccentColors = AccentColors {
        primary: "#aa0000",
        secondary: "#00aa00",
        primary_text: "#0000aa",
        primary_container: "#aaaa00",
        surface_tint: "#00aaaa",
    };

    #[test]
    fn test_merged_takes_accent_roles_from_accent() {
        let palette = ColorPalette::merged(&BASE, &ACCENT, "Test");
        assert_eq!(palette.primary, "#aa0000");
        assert_eq!(palette.secondary, "#00aa00");
        assert_eq!(palette.primary_text, "#0000aa");
        assert_eq!(palette.primary_container, "#aaaa00");
        assert_eq!(palette.surface_tint, "#00aaaa");
    }

    #[test]
    fn test_merged_takes_surface_roles_from_base() {
        let palette = ColorPalette::merged(&BASE, &ACCENT, "Test");
        assert_eq!(palette.surface, "#111111");
        assert_eq!(palette.background, "#555555");
        assert_eq!(palette.outline, "#777777");
        assert_eq!(palette.surface_container_high, "#999999");
        assert_eq!(palette.name, "Test");
        assert_eq!(palette.matugen_type, None);
    }

    #[test]
    fn test_merged_accepts_owned_name() {
        let palette = ColorPalette::merged(&BASE, &ACCENT, format!("{} Light", "Test"));
        assert_eq!(palette.name, "Test Light");
    }

    #[test]
    fn test_role_lookup() {
        let palette = ColorPalette::merged(&BASE, &ACCENT, "Test");
        assert_eq!(palette.role("surfaceContainer"), Some("#888888"));
        assert_eq!(palette.role("primaryText"), Some("#0000aa"));
        assert_eq!(palette.role("nope"), None);
        assert_eq!(palette.rgb("primary").unwrap(), RgbColor::new(0xaa, 0, 0));
        assert!(palette.rgb("nope").is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let palette = ColorPalette::merged(&BASE, &ACCENT, "Test");
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["name"], "Test");
        assert_eq!(json["primaryText"], "#0000aa");
        assert_eq!(json["surfaceContainerHigh"], "#999999");
        // Absent scheme hints are omitted entirely
        assert!(json.get("matugen_type").is_none());

        let tagged = ColorPalette {
            matugen_type: Some("scheme-tonal-spot"),
            ..palette
        };
        let json = serde_json::to_value(&tagged).unwrap();
        assert_eq!(json["matugen_type"], "scheme-tonal-spot");
    }

    #[test]
    fn test_variant_from_is_light() {
        assert_eq!(ThemeVariant::from_is_light(true), ThemeVariant::Light);
        assert_eq!(ThemeVariant::from_is_light(false), ThemeVariant::Dark);
        assert!(ThemeVariant::Light.is_light());
        assert!(!ThemeVariant::Dark.is_light());
    }

    #[test]
    fn test_variant_detect() {
        // Just verify detect() returns without panicking
        let variant = ThemeVariant::detect();
        assert!(variant == ThemeVariant::Dark || variant == ThemeVariant::Light);
    }
}

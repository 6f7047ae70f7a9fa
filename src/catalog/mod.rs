//! The theme catalog.
//!
//! All data is `'static` and never mutated, so every function here is a pure
//! read that any number of threads may call concurrently.
//!
//! Lookups fail in two different ways on purpose:
//! - an unknown Catppuccin identifier (`cat-*`) yields `None`;
//! - any other unknown identifier silently resolves to the blue stock theme.

pub mod categories;
pub mod catppuccin;
pub mod stock;

use tracing::debug;

use crate::models::{ColorPalette, ThemeVariant};

pub use categories::{names, ThemeCategory};
pub use catppuccin::CatppuccinVariant;
pub use stock::{ThemeTable, DARK_THEMES, FALLBACK_THEME, LIGHT_THEMES};

/// Resolves a theme identifier to a palette for `variant`.
///
/// # Examples
///
/// ```
/// use shell_themes::catalog;
/// use shell_themes::models::ThemeVariant;
///
/// let blue = catalog::theme_by_name("blue", ThemeVariant::Dark).unwrap();
/// assert_eq!(blue.name, "Blue");
///
/// let mauve = catalog::theme_by_name("cat-mauve", ThemeVariant::Light).unwrap();
/// assert_eq!(mauve.name, "Mauve Light");
/// assert_eq!(mauve.primary, "#8839ef");
///
/// assert!(catalog::theme_by_name("cat-does-not-exist", ThemeVariant::Dark).is_none());
/// ```
pub fn theme_by_name(id: &str, variant: ThemeVariant) -> Option<ColorPalette> {
    if catppuccin::is_catppuccin_id(id) {
        return catppuccin::find(id).map(|cat| cat.palette(variant));
    }

    let themes = available_themes(variant);
    if let Some(palette) = themes.get(id) {
        return Some(palette.clone());
    }

    debug!("Unknown stock theme '{}', falling back to '{}'", id, FALLBACK_THEME);
    themes.get(FALLBACK_THEME).cloned()
}

/// Stock identifiers in table order.
pub fn all_theme_names() -> Vec<&'static str> {
    DARK_THEMES.keys().collect()
}

/// Catppuccin identifiers in table order.
pub fn catppuccin_variant_names() -> Vec<&'static str> {
    catppuccin::variants().iter().map(|v| v.id).collect()
}

/// Returns true if `id` is a stock theme identifier.
///
/// Scans the small static table rather than hashing.
pub fn is_stock_theme(id: &str) -> bool {
    DARK_THEMES.contains_key(id)
}

/// Returns true if `id` names an existing Catppuccin variant.
///
/// Scans the small static variant table rather than hashing.
pub fn is_catppuccin_variant(id: &str) -> bool {
    catppuccin::find(id).is_some()
}

/// The stock table for `variant` (the shared table, not a copy).
pub fn available_themes(variant: ThemeVariant) -> &'static ThemeTable {
    stock::table(variant)
}

/// The category grouping table.
pub fn theme_categories() -> &'static [ThemeCategory] {
    categories::categories()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue_dark_name() {
        let blue = theme_by_name("blue", ThemeVariant::Dark).unwrap();
        assert_eq!(blue.name, "Blue");
    }

    #[test]
    fn test_unknown_stock_falls_back_to_blue() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            assert_eq!(
                theme_by_name("nonexistent-id", variant),
                theme_by_name("blue", variant)
            );
        }
        let light = theme_by_name("", ThemeVariant::Light).unwrap();
        assert_eq!(light.name, "Blue Light");
    }

    #[test]
    fn test_dynamic_falls_back_to_blue() {
        assert_eq!(
            theme_by_name(names::DYNAMIC, ThemeVariant::Dark),
            theme_by_name(names::BLUE, ThemeVariant::Dark)
        );
    }

    #[test]
    fn test_catppuccin_mauve() {
        let dark = theme_by_name("cat-mauve", ThemeVariant::Dark).unwrap();
        assert_eq!(dark.primary, "#cba6f7");
        assert_eq!(dark.name, "Mauve");

        let light = theme_by_name("cat-mauve", ThemeVariant::Light).unwrap();
        assert_eq!(light.primary, "#8839ef");
        assert_eq!(light.name, "Mauve Light");
    }

    #[test]
    fn test_unknown_catppuccin_is_none() {
        assert!(theme_by_name("cat-does-not-exist", ThemeVariant::Dark).is_none());
        assert!(theme_by_name("cat-does-not-exist", ThemeVariant::Light).is_none());
        assert!(theme_by_name("cat-", ThemeVariant::Dark).is_none());
    }

    #[test]
    fn test_stock_pink_is_not_catppuccin_pink() {
        let stock = theme_by_name("pink", ThemeVariant::Dark).unwrap();
        let cat = theme_by_name("cat-pink", ThemeVariant::Dark).unwrap();
        assert_eq!(stock.primary, "#e91e63");
        assert_eq!(cat.primary, "#f5c2e7");
        assert_eq!(stock.name, cat.name);
    }

    #[test]
    fn test_all_theme_names_len() {
        assert_eq!(all_theme_names().len(), DARK_THEMES.len());
        assert_eq!(all_theme_names()[0], "blue");
    }

    #[test]
    fn test_catppuccin_variant_names() {
        let names = catppuccin_variant_names();
        assert_eq!(names.len(), 14);
        assert_eq!(names.first(), Some(&"cat-rosewater"));
        assert_eq!(names.last(), Some(&"cat-lavender"));
    }

    #[test]
    fn test_membership() {
        assert!(is_stock_theme("deepBlue"));
        assert!(!is_stock_theme("cat-blue"));
        assert!(!is_stock_theme("dynamic"));
        assert!(is_catppuccin_variant("cat-blue"));
        assert!(!is_catppuccin_variant("blue"));
        assert!(!is_catppuccin_variant("cat-does-not-exist"));
    }

    #[test]
    fn test_available_themes_is_shared_table() {
        assert!(std::ptr::eq(available_themes(ThemeVariant::Dark), &DARK_THEMES));
        assert!(std::ptr::eq(available_themes(ThemeVariant::Light), &LIGHT_THEMES));
    }

    #[test]
    fn test_accessors_are_idempotent() {
        for id in ["blue", "coral", "cat-sky", "cat-nope", "missing"] {
            for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
                assert_eq!(theme_by_name(id, variant), theme_by_name(id, variant));
            }
        }
        assert_eq!(all_theme_names(), all_theme_names());
        assert_eq!(catppuccin_variant_names(), catppuccin_variant_names());
        assert_eq!(theme_categories(), theme_categories());
    }

    #[test]
    fn test_every_listed_id_resolves() {
        for category in theme_categories() {
            for id in category.variants {
                let palette = theme_by_name(id, ThemeVariant::Dark).unwrap();
                assert!(!palette.name.is_empty(), "{id} has no name");
            }
        }
    }
}

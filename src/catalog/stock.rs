//! Stock themes: the directly authored palettes, one table per mode.
//!
//! Both tables list the same identifiers in the same order. Entry order is
//! the order the theme picker shows them in.

use std::borrow::Cow;

use crate::models::{ColorPalette, ThemeVariant};

/// Identifier every stock lookup falls back to.
pub const FALLBACK_THEME: &str = "blue";

/// Ordered, read-only mapping from theme identifier to palette for one mode.
#[derive(Debug)]
pub struct ThemeTable {
    variant: ThemeVariant,
    entries: &'static [(&'static str, ColorPalette)],
}

impl ThemeTable {
    /// Mode this table's palettes are authored for.
    pub const fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Returns the palette stored under `id`, if any.
    ///
    /// Linear scan; the tables hold ten entries.
    pub fn get(&self, id: &str) -> Option<&'static ColorPalette> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, palette)| palette)
    }

    /// Returns true if `id` is a key of this table.
    pub fn contains_key(&self, id: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == id)
    }

    /// Identifiers in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// `(identifier, palette)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static ColorPalette)> {
        self.entries.iter().map(|(key, palette)| (*key, palette))
    }

    /// Number of themes in the table.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stock palettes for dark mode.
pub static DARK_THEMES: ThemeTable = ThemeTable {
    variant: ThemeVariant::Dark,
    entries: &DARK_ENTRIES,
};

/// Stock palettes for light mode.
pub static LIGHT_THEMES: ThemeTable = ThemeTable {
    variant: ThemeVariant::Light,
    entries: &LIGHT_ENTRIES,
};

/// Returns the stock table for `variant`.
pub fn table(variant: ThemeVariant) -> &'static ThemeTable {
    match variant {
        ThemeVariant::Dark => &DARK_THEMES,
        ThemeVariant::Light => &LIGHT_THEMES,
    }
}

static DARK_ENTRIES: [(&str, ColorPalette); 10] = [
    (
        "blue",
        ColorPalette {
            name: Cow::Borrowed("Blue"),
            primary: "#42a5f5",
            primary_text: "#000000",
            primary_container: "#1976d2",
            secondary: "#8ab4f8",
            surface: "#1a1c1e",
            surface_text: "#e3e8ef",
            surface_variant: "#44464f",
            surface_variant_text: "#c4c7c5",
            surface_tint: "#8ab4f8",
            background: "#1a1c1e",
            background_text: "#e3e8ef",
            outline: "#8e918f",
            surface_container: "#1e2023",
            surface_container_high: "#292b2f",
            matugen_type: None,
        },
    ),
    (
        "deepBlue",
        ColorPalette {
            name: Cow::Borrowed("Deep Blue"),
            primary: "#0061a4",
            primary_text: "#000000",
            primary_container: "#004881",
            secondary: "#42a5f5",
            surface: "#1a1c1e",
            surface_text: "#e3e8ef",
            surface_variant: "#44464f",
            surface_variant_text: "#c4c7c5",
            surface_tint: "#8ab4f8",
            background: "#1a1c1e",
            background_text: "#e3e8ef",
            outline: "#8e918f",
            surface_container: "#1e2023",
            surface_container_high: "#292b2f",
            matugen_type: None,
        },
    ),
    (
        "purple",
        ColorPalette {
            name: Cow::Borrowed("Purple"),
            primary: "#D0BCFF",
            primary_text: "#381E72",
            primary_container: "#4F378B",
            secondary: "#CCC2DC",
            surface: "#10121E",
            surface_text: "#E6E0E9",
            surface_variant: "#49454F",
            surface_variant_text: "#CAC4D0",
            surface_tint: "#D0BCFF",
            background: "#10121E",
            background_text: "#E6E0E9",
            outline: "#938F99",
            surface_container: "#1D1B20",
            surface_container_high: "#2B2930",
            matugen_type: None,
        },
    ),
    (
        "green",
        ColorPalette {
            name: Cow::Borrowed("Green"),
            primary: "#4caf50",
            primary_text: "#000000",
            primary_container: "#388e3c",
            secondary: "#81c995",
            surface: "#0f1411",
            surface_text: "#e1f5e3",
            surface_variant: "#404943",
            surface_variant_text: "#c1cbc4",
            surface_tint: "#81c995",
            background: "#0f1411",
            background_text: "#e1f5e3",
            outline: "#8b938c",
            surface_container: "#1a1f1b",
            surface_container_high: "#252a26",
            matugen_type: None,
        },
    ),
    (
        "orange",
        ColorPalette {
            name: Cow::Borrowed("Orange"),
            primary: "#ff6d00",
            primary_text: "#000000",
            primary_container: "#e65100",
            secondary: "#ffb74d",
            surface: "#1c1410",
            surface_text: "#f5f1ea",
            surface_variant: "#4a453a",
            surface_variant_text: "#cbc5b8",
            surface_tint: "#ffb74d",
            background: "#1c1410",
            background_text: "#f5f1ea",
            outline: "#958f84",
            surface_container: "#211e17",
            surface_container_high: "#2c291f",
            matugen_type: None,
        },
    ),
    (
        "red",
        ColorPalette {
            name: Cow::Borrowed("Red"),
            primary: "#f44336",
            primary_text: "#000000",
            primary_container: "#d32f2f",
            secondary: "#f28b82",
            surface: "#1c1011",
            surface_text: "#f5e8ea",
            surface_variant: "#4a3f41",
            surface_variant_text: "#cbc2c4",
            surface_tint: "#f28b82",
            background: "#1c1011",
            background_text: "#f5e8ea",
            outline: "#958b8d",
            surface_container: "#211b1c",
            surface_container_high: "#2c2426",
            matugen_type: None,
        },
    ),
    (
        "cyan",
        ColorPalette {
            name: Cow::Borrowed("Cyan"),
            primary: "#00bcd4",
            primary_text: "#000000",
            primary_container: "#0097a7",
            secondary: "#4dd0e1",
            surface: "#0f1617",
            surface_text: "#e8f4f5",
            surface_variant: "#3f474a",
            surface_variant_text: "#c2c9cb",
            surface_tint: "#4dd0e1",
            background: "#0f1617",
            background_text: "#e8f4f5",
            outline: "#8c9194",
            surface_container: "#1a1f20",
            surface_container_high: "#252b2c",
            matugen_type: None,
        },
    ),
    (
        "pink",
        ColorPalette {
            name: Cow::Borrowed("Pink"),
            primary: "#e91e63",
            primary_text: "#000000",
            primary_container: "#c2185b",
            secondary: "#f8bbd9",
            surface: "#1a1014",
            surface_text: "#f3e8ee",
            surface_variant: "#483f45",
            surface_variant_text: "#c9c2c7",
            surface_tint: "#f8bbd9",
            background: "#1a1014",
            background_text: "#f3e8ee",
            outline: "#938a90",
            surface_container: "#1f1b1e",
            surface_container_high: "#2a2428",
            matugen_type: None,
        },
    ),
    (
        "amber",
        ColorPalette {
            name: Cow::Borrowed("Amber"),
            primary: "#ffc107",
            primary_text: "#000000",
            primary_container: "#ff8f00",
            secondary: "#ffd54f",
            surface: "#1a1710",
            surface_text: "#f3f0e8",
            surface_variant: "#49453a",
            surface_variant_text: "#cac5b8",
            surface_tint: "#ffd54f",
            background: "#1a1710",
            background_text: "#f3f0e8",
            outline: "#949084",
            surface_container: "#1f1e17",
            surface_container_high: "#2a281f",
            matugen_type: None,
        },
    ),
    (
        "coral",
        ColorPalette {
            name: Cow::Borrowed("Coral"),
            primary: "#ffb4ab",
            primary_text: "#000000",
            primary_container: "#8c1d18",
            secondary: "#f9dedc",
            surface: "#1a1110",
            surface_text: "#f1e8e7",
            surface_variant: "#4a4142",
            surface_variant_text: "#cdc2c1",
            surface_tint: "#ffb4ab",
            background: "#1a1110",
            background_text: "#f1e8e7",
            outline: "#968b8a",
            surface_container: "#201a19",
            surface_container_high: "#2b2221",
            matugen_type: None,
        },
    ),
];

static LIGHT_ENTRIES: [(&str, ColorPalette); 10] = [
    (
        "blue",
        ColorPalette {
            name: Cow::Borrowed("Blue Light"),
            primary: "#1976d2",
            primary_text: "#ffffff",
            primary_container: "#e3f2fd",
            secondary: "#42a5f5",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#1976d2",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "deepBlue",
        ColorPalette {
            name: Cow::Borrowed("Deep Blue Light"),
            primary: "#0061a4",
            primary_text: "#ffffff",
            primary_container: "#cfe5ff",
            secondary: "#1976d2",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#0061a4",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "purple",
        ColorPalette {
            name: Cow::Borrowed("Purple Light"),
            primary: "#6750A4",
            primary_text: "#ffffff",
            primary_container: "#EADDFF",
            secondary: "#625B71",
            surface: "#FFFBFE",
            surface_text: "#1C1B1F",
            surface_variant: "#E7E0EC",
            surface_variant_text: "#49454F",
            surface_tint: "#6750A4",
            background: "#FFFBFE",
            background_text: "#1C1B1F",
            outline: "#79747E",
            surface_container: "#F3EDF7",
            surface_container_high: "#ECE6F0",
            matugen_type: None,
        },
    ),
    (
        "green",
        ColorPalette {
            name: Cow::Borrowed("Green Light"),
            primary: "#2e7d32",
            primary_text: "#ffffff",
            primary_container: "#e8f5e8",
            secondary: "#4caf50",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#2e7d32",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "orange",
        ColorPalette {
            name: Cow::Borrowed("Orange Light"),
            primary: "#e65100",
            primary_text: "#ffffff",
            primary_container: "#ffecb3",
            secondary: "#ff9800",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#e65100",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "red",
        ColorPalette {
            name: Cow::Borrowed("Red Light"),
            primary: "#d32f2f",
            primary_text: "#ffffff",
            primary_container: "#ffebee",
            secondary: "#f44336",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#d32f2f",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "cyan",
        ColorPalette {
            name: Cow::Borrowed("Cyan Light"),
            primary: "#0097a7",
            primary_text: "#ffffff",
            primary_container: "#e0f2f1",
            secondary: "#00bcd4",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#0097a7",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "pink",
        ColorPalette {
            name: Cow::Borrowed("Pink Light"),
            primary: "#c2185b",
            primary_text: "#ffffff",
            primary_container: "#fce4ec",
            secondary: "#e91e63",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#c2185b",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "amber",
        ColorPalette {
            name: Cow::Borrowed("Amber Light"),
            primary: "#ff8f00",
            primary_text: "#000000",
            primary_container: "#fff8e1",
            secondary: "#ffc107",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#ff8f00",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
    (
        "coral",
        ColorPalette {
            name: Cow::Borrowed("Coral Light"),
            primary: "#8c1d18",
            primary_text: "#ffffff",
            primary_container: "#ffdad6",
            secondary: "#ff5449",
            surface: "#fefefe",
            surface_text: "#1a1c1e",
            surface_variant: "#e7e0ec",
            surface_variant_text: "#49454f",
            surface_tint: "#8c1d18",
            background: "#fefefe",
            background_text: "#1a1c1e",
            outline: "#79747e",
            surface_container: "#f3f3f3",
            surface_container_high: "#ececec",
            matugen_type: None,
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    #[test]
    fn test_membership_matches_keys() {
        for table in [&DARK_THEMES, &LIGHT_THEMES] {
            for id in table.keys() {
                assert!(table.contains_key(id));
                let found = table.iter().find(|(key, _)| *key == id).map(|(_, p)| p);
                assert_eq!(table.get(id), found);
            }
            assert!(!table.contains_key("Blue"));
            assert!(table.get("").is_none());
        }
    }

    #[test]
    fn test_tables_are_symmetric() {
        assert_eq!(DARK_THEMES.len(), LIGHT_THEMES.len());
        for id in DARK_THEMES.keys() {
            assert!(LIGHT_THEMES.contains_key(id), "'{id}' missing from light table");
        }
        for id in LIGHT_THEMES.keys() {
            assert!(DARK_THEMES.contains_key(id), "'{id}' missing from dark table");
        }
        // Same order too, so the picker lists both modes identically
        assert!(DARK_THEMES.keys().eq(LIGHT_THEMES.keys()));
    }

    #[test]
    fn test_fallback_exists_in_both_modes() {
        assert!(DARK_THEMES.contains_key(FALLBACK_THEME));
        assert!(LIGHT_THEMES.contains_key(FALLBACK_THEME));
    }

    #[test]
    fn test_table_order() {
        let keys: Vec<_> = DARK_THEMES.keys().collect();
        assert_eq!(
            keys,
            vec![
                "blue", "deepBlue", "purple", "green", "orange", "red", "cyan", "pink", "amber",
                "coral"
            ]
        );
    }

    #[test]
    fn test_light_names_carry_suffix() {
        for (id, light) in LIGHT_THEMES.iter() {
            let dark = DARK_THEMES.get(id).unwrap();
            assert_eq!(light.name, format!("{} Light", dark.name));
        }
    }

    #[test]
    fn test_all_colours_parse() {
        for table in [&DARK_THEMES, &LIGHT_THEMES] {
            for (id, palette) in table.iter() {
                for (role, hex) in palette.roles() {
                    assert!(
                        RgbColor::from_hex(hex).is_ok(),
                        "{id}.{role} has invalid colour {hex}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_table_variant() {
        assert_eq!(table(ThemeVariant::Dark).variant(), ThemeVariant::Dark);
        assert_eq!(table(ThemeVariant::Light).variant(), ThemeVariant::Light);
        assert!(!DARK_THEMES.is_empty());
    }

    #[test]
    fn test_get_unknown() {
        assert!(DARK_THEMES.get("dynamic").is_none());
        assert!(!LIGHT_THEMES.contains_key("Blue"));
    }

    #[test]
    fn test_purple_keeps_authored_case() {
        let purple = DARK_THEMES.get("purple").unwrap();
        assert_eq!(purple.primary, "#D0BCFF");
        assert_eq!(purple.primary_text, "#381E72");
    }
}

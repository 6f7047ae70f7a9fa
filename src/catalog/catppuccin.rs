//! Catppuccin variants, derived at lookup time.
//!
//! Each variant only stores its accent colours. The surface colours come
//! from the shared Mocha (dark) or Latte (light) base record.

use crate::models::{AccentColors, BaseColors, ColorPalette, ThemeVariant};

/// Prefix shared by every Catppuccin identifier.
pub const PREFIX: &str = "cat-";

/// One Catppuccin accent, with its colours for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatppuccinVariant {
    /// Catalog identifier, e.g. `cat-mauve`
    pub id: &'static str,
    /// Display name, e.g. `Mauve`
    pub name: &'static str,
    /// Accent colours laid over Mocha
    pub dark: AccentColors,
    /// Accent colours laid over Latte
    pub light: AccentColors,
}

impl CatppuccinVariant {
    /// Accent record for `variant`.
    pub const fn accent(&self, variant: ThemeVariant) -> &AccentColors {
        match variant {
            ThemeVariant::Dark => &self.dark,
            ThemeVariant::Light => &self.light,
        }
    }

    /// Display name for `variant`: `"Mauve"` or `"Mauve Light"`.
    pub fn display_name(&self, variant: ThemeVariant) -> String {
        match variant {
            ThemeVariant::Dark => self.name.to_string(),
            ThemeVariant::Light => format!("{} Light", self.name),
        }
    }

    /// Merges this variant's accents over the base record for `variant`.
    pub fn palette(&self, variant: ThemeVariant) -> ColorPalette {
        ColorPalette::merged(base(variant), self.accent(variant), self.display_name(variant))
    }
}

/// Returns true if `id` uses the Catppuccin identifier namespace.
///
/// This does not mean the variant exists; see [`find`].
pub fn is_catppuccin_id(id: &str) -> bool {
    id.starts_with(PREFIX)
}

/// Shared base record for `variant`.
pub const fn base(variant: ThemeVariant) -> &'static BaseColors {
    match variant {
        ThemeVariant::Dark => &MOCHA,
        ThemeVariant::Light => &LATTE,
    }
}

/// Looks up a variant by identifier.
pub fn find(id: &str) -> Option<&'static CatppuccinVariant> {
    VARIANTS.iter().find(|variant| variant.id == id)
}

/// All variants in picker order.
pub fn variants() -> &'static [CatppuccinVariant] {
    &VARIANTS
}

/// Mocha surface colours.
pub const MOCHA: BaseColors = BaseColors {
    surface: "#45475a",
    surface_text: "#cdd6f4",
    surface_variant: "#45475a",
    surface_variant_text: "#a6adc8",
    background: "#1e1e2e",
    background_text: "#cdd6f4",
    outline: "#6c7086",
    surface_container: "#313244",
    surface_container_high: "#585b70",
};

/// Latte surface colours.
pub const LATTE: BaseColors = BaseColors {
    surface: "#bcc0cc",
    surface_text: "#4c4f69",
    surface_variant: "#bcc0cc",
    surface_variant_text: "#6c6f85",
    background: "#eff1f5",
    background_text: "#4c4f69",
    outline: "#9ca0b0",
    surface_container: "#ccd0da",
    surface_container_high: "#acb0be",
};

// Order here is the order the picker lists them in.
static VARIANTS: [CatppuccinVariant; 14] = [
    CatppuccinVariant {
        id: "cat-rosewater",
        name: "Rosewater",
        dark: AccentColors {
            primary: "#f5e0dc",
            secondary: "#f2cdcd",
            primary_text: "#1e1e2e",
            primary_container: "#8b6b5e",
            surface_tint: "#f5e0dc",
        },
        light: AccentColors {
            primary: "#dc8a78",
            secondary: "#dd7878",
            primary_text: "#ffffff",
            primary_container: "#f4d2ca",
            surface_tint: "#dc8a78",
        },
    },
    CatppuccinVariant {
        id: "cat-flamingo",
        name: "Flamingo",
        dark: AccentColors {
            primary: "#f2cdcd",
            secondary: "#f5e0dc",
            primary_text: "#1e1e2e",
            primary_container: "#885d62",
            surface_tint: "#f2cdcd",
        },
        light: AccentColors {
            primary: "#dd7878",
            secondary: "#dc8a78",
            primary_text: "#ffffff",
            primary_container: "#f4caca",
            surface_tint: "#dd7878",
        },
    },
    CatppuccinVariant {
        id: "cat-pink",
        name: "Pink",
        dark: AccentColors {
            primary: "#f5c2e7",
            secondary: "#cba6f7",
            primary_text: "#1e1e2e",
            primary_container: "#8b537a",
            surface_tint: "#f5c2e7",
        },
        light: AccentColors {
            primary: "#ea76cb",
            secondary: "#8839ef",
            primary_text: "#ffffff",
            primary_container: "#f7c9e7",
            surface_tint: "#ea76cb",
        },
    },
    CatppuccinVariant {
        id: "cat-mauve",
        name: "Mauve",
        dark: AccentColors {
            primary: "#cba6f7",
            secondary: "#b4befe",
            primary_text: "#1e1e2e",
            primary_container: "#61378a",
            surface_tint: "#cba6f7",
        },
        light: AccentColors {
            primary: "#8839ef",
            secondary: "#7287fd",
            primary_text: "#ffffff",
            primary_container: "#e4d3ff",
            surface_tint: "#8839ef",
        },
    },
    CatppuccinVariant {
        id: "cat-red",
        name: "Red",
        dark: AccentColors {
            primary: "#f38ba8",
            secondary: "#eba0ac",
            primary_text: "#1e1e2e",
            primary_container: "#891c3b",
            surface_tint: "#f38ba8",
        },
        light: AccentColors {
            primary: "#d20f39",
            secondary: "#e64553",
            primary_text: "#ffffff",
            primary_container: "#f1b8c4",
            surface_tint: "#d20f39",
        },
    },
    CatppuccinVariant {
        id: "cat-maroon",
        name: "Maroon",
        dark: AccentColors {
            primary: "#eba0ac",
            secondary: "#f38ba8",
            primary_text: "#1e1e2e",
            primary_container: "#81313f",
            surface_tint: "#eba0ac",
        },
        light: AccentColors {
            primary: "#e64553",
            secondary: "#d20f39",
            primary_text: "#ffffff",
            primary_container: "#f4c3c8",
            surface_tint: "#e64553",
        },
    },
    CatppuccinVariant {
        id: "cat-peach",
        name: "Peach",
        dark: AccentColors {
            primary: "#fab387",
            secondary: "#f9e2af",
            primary_text: "#1e1e2e",
            primary_container: "#90441a",
            surface_tint: "#fab387",
        },
        light: AccentColors {
            primary: "#fe640b",
            secondary: "#df8e1d",
            primary_text: "#ffffff",
            primary_container: "#ffddcc",
            surface_tint: "#fe640b",
        },
    },
    CatppuccinVariant {
        id: "cat-yellow",
        name: "Yellow",
        dark: AccentColors {
            primary: "#f9e2af",
            secondary: "#a6e3a1",
            primary_text: "#1e1e2e",
            primary_container: "#8f7342",
            surface_tint: "#f9e2af",
        },
        light: AccentColors {
            primary: "#df8e1d",
            secondary: "#40a02b",
            primary_text: "#ffffff",
            primary_container: "#fff3cc",
            surface_tint: "#df8e1d",
        },
    },
    CatppuccinVariant {
        id: "cat-green",
        name: "Green",
        dark: AccentColors {
            primary: "#a6e3a1",
            secondary: "#94e2d5",
            primary_text: "#1e1e2e",
            primary_container: "#3c7534",
            surface_tint: "#a6e3a1",
        },
        light: AccentColors {
            primary: "#40a02b",
            secondary: "#179299",
            primary_text: "#ffffff",
            primary_container: "#d4f5d4",
            surface_tint: "#40a02b",
        },
    },
    CatppuccinVariant {
        id: "cat-teal",
        name: "Teal",
        dark: AccentColors {
            primary: "#94e2d5",
            secondary: "#89dceb",
            primary_text: "#1e1e2e",
            primary_container: "#2a7468",
            surface_tint: "#94e2d5",
        },
        light: AccentColors {
            primary: "#179299",
            secondary: "#04a5e5",
            primary_text: "#ffffff",
            primary_container: "#ccf2f2",
            surface_tint: "#179299",
        },
    },
    CatppuccinVariant {
        id: "cat-sky",
        name: "Sky",
        dark: AccentColors {
            primary: "#89dceb",
            secondary: "#74c7ec",
            primary_text: "#1e1e2e",
            primary_container: "#196e7e",
            surface_tint: "#89dceb",
        },
        light: AccentColors {
            primary: "#04a5e5",
            secondary: "#209fb5",
            primary_text: "#ffffff",
            primary_container: "#ccebff",
            surface_tint: "#04a5e5",
        },
    },
    CatppuccinVariant {
        id: "cat-sapphire",
        name: "Sapphire",
        dark: AccentColors {
            primary: "#74c7ec",
            secondary: "#89b4fa",
            primary_text: "#1e1e2e",
            primary_container: "#0a597f",
            surface_tint: "#74c7ec",
        },
        light: AccentColors {
            primary: "#209fb5",
            secondary: "#1e66f5",
            primary_text: "#ffffff",
            primary_container: "#d0f0f5",
            surface_tint: "#209fb5",
        },
    },
    CatppuccinVariant {
        id: "cat-blue",
        name: "Blue",
        dark: AccentColors {
            primary: "#89b4fa",
            secondary: "#b4befe",
            primary_text: "#1e1e2e",
            primary_container: "#19468d",
            surface_tint: "#89b4fa",
        },
        light: AccentColors {
            primary: "#1e66f5",
            secondary: "#7287fd",
            primary_text: "#ffffff",
            primary_container: "#ccd9ff",
            surface_tint: "#1e66f5",
        },
    },
    CatppuccinVariant {
        id: "cat-lavender",
        name: "Lavender",
        dark: AccentColors {
            primary: "#b4befe",
            secondary: "#cba6f7",
            primary_text: "#1e1e2e",
            primary_container: "#4a5091",
            surface_tint: "#b4befe",
        },
        light: AccentColors {
            primary: "#7287fd",
            secondary: "#8839ef",
            primary_text: "#ffffff",
            primary_container: "#dde1ff",
            surface_tint: "#7287fd",
        },
    },
];

//! Grouping metadata for the theme picker, plus well-known identifiers.

use serde::Serialize;

/// Well-known theme identifiers.
pub mod names {
    /// Default stock theme, also the fallback for unknown identifiers
    pub const BLUE: &str = "blue";
    /// Deep blue stock theme
    pub const DEEP_BLUE: &str = "deepBlue";
    /// Material purple stock theme
    pub const PURPLE: &str = "purple";
    /// Green stock theme
    pub const GREEN: &str = "green";
    /// Orange stock theme
    pub const ORANGE: &str = "orange";
    /// Red stock theme
    pub const RED: &str = "red";
    /// Cyan stock theme
    pub const CYAN: &str = "cyan";
    /// Pink stock theme
    pub const PINK: &str = "pink";
    /// Amber stock theme
    pub const AMBER: &str = "amber";
    /// Coral stock theme
    pub const CORAL: &str = "coral";
    /// Wallpaper-derived colours generated outside the catalog.
    ///
    /// Not a stock theme: looking it up yields the blue fallback.
    pub const DYNAMIC: &str = "dynamic";
}

/// A named group of theme identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeCategory {
    /// Category key (`GENERIC`, `CATPPUCCIN`)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Member identifiers
    pub variants: &'static [&'static str],
}

static CATEGORIES: [ThemeCategory; 2] = [
    ThemeCategory {
        id: "GENERIC",
        name: "Generic",
        variants: &[
            names::BLUE,
            names::DEEP_BLUE,
            names::PURPLE,
            names::GREEN,
            names::ORANGE,
            names::RED,
            names::CYAN,
            names::PINK,
            names::AMBER,
            names::CORAL,
        ],
    },
    ThemeCategory {
        id: "CATPPUCCIN",
        name: "Catppuccin",
        variants: &[
            "cat-rosewater",
            "cat-flamingo",
            "cat-pink",
            "cat-mauve",
            "cat-red",
            "cat-maroon",
            "cat-peach",
            "cat-yellow",
            "cat-green",
            "cat-teal",
            "cat-sky",
            "cat-sapphire",
            "cat-blue",
            "cat-lavender",
        ],
    },
];

/// The static category table.
pub fn categories() -> &'static [ThemeCategory] {
    &CATEGORIES
}

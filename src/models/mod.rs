//! Data models for palettes and colours.
//!
//! These types carry no catalog data of their own; the tables live in
//! [`crate::catalog`].

pub mod palette;
pub mod rgb;

// Re-export all model types
pub use palette::{AccentColors, BaseColors, ColorPalette, ThemeVariant};
pub use rgb::RgbColor;

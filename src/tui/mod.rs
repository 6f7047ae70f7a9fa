//! Terminal rendering support.
//!
//! Only available with the `ratatui` feature.

pub mod theme;

pub use theme::Theme;

//! Shell Themes Library
//!
//! Stock and Catppuccin colour palettes for a desktop shell, the lookup
//! functions the shell's theme picker and renderer call, and the saved
//! theme preference.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
#[cfg(feature = "ratatui")]
pub mod tui;

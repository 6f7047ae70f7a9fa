//! CLI command handlers.
//!
//! Scriptable access to the theme catalog and the saved theme preference.
//! Every command that prints data accepts `--json`.

pub mod category;
pub mod common;
pub mod config;
pub mod current;
pub mod list;
pub mod show;

// Re-export types used by main.rs and tests
pub use category::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use current::CurrentArgs;
pub use list::ListArgs;
pub use show::ShowArgs;

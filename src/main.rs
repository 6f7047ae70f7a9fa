//! Shell Themes - inspect the desktop shell's colour palettes
//!
//! Lists the stock and Catppuccin themes, prints resolved palettes, and
//! manages the saved theme preference.

use clap::{Parser, Subcommand};
use shell_themes::cli::{
    CategoriesArgs, CliResult, ConfigArgs, CurrentArgs, ExitCode, ListArgs, ShowArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shell Themes - inspect the desktop shell's colour palettes
#[derive(Parser, Debug)]
#[command(name = "shell-themes", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available themes
    List(ListArgs),
    /// Show the colours of a theme
    Show(ShowArgs),
    /// List theme categories
    Categories(CategoriesArgs),
    /// Show the palette selected in the configuration
    Current(CurrentArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::List(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Categories(args) => args.execute(),
            Self::Current(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so --json output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}

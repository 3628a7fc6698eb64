use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skindash")]
#[command(about = "Skincare routine tracker with TUI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Force the active period (morning or evening) instead of deriving it
    /// from the clock
    #[arg(long, value_name = "PERIOD")]
    pub period: Option<String>,

    /// Start on a specific screen (home, routines, products, profile)
    #[arg(long, value_name = "SCREEN")]
    pub screen: Option<String>,

    /// Use a custom catalog file instead of the built-in product list
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Write debug logs to skindash.log in the current directory
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a period's checklist without launching the TUI
    Show {
        /// Period to print (defaults to the current one)
        #[arg(long, value_name = "PERIOD")]
        period: Option<String>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog TOML file
    CheckCatalog {
        /// Path to the catalog file
        file: PathBuf,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}

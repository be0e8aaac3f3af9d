use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rxcheck",
    version,
    about = "Validate prescription lines against a medicine catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Use this catalog file instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a single medicine line
    Validate {
        /// Raw line, e.g. "Paracetamol 500mg 1-0-1"
        line: String,

        /// Comma-separated catalog names already accepted this session
        #[arg(long)]
        accepted: Option<String>,
    },

    /// Validate every line of a prescription in order
    Prescription {
        /// File with one medicine per line (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Inspect the medicine catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List every known medicine
    List,
    /// Show one medicine by name
    Show {
        /// Canonical medicine name (case-insensitive)
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. matcher.threshold, defaults.dosage, catalog.path)
        key: String,
        /// Config value
        value: String,
    },
}

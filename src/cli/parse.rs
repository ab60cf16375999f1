//! CLI parse: clap types for is-it-rick. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// is-it-rick - inspect the resolved application configuration
#[derive(Parser)]
#[command(name = "is-it-rick")]
#[command(about = "Resolve and inspect the is-it-rick configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override file path (default: local_config.toml in the working directory)
    #[arg(long, conflicts_with = "no_override")]
    pub config: Option<PathBuf>,

    /// Ignore any override file and use built-in defaults
    #[arg(long)]
    pub no_override: bool,

    /// Fail on malformed override files or invalid values instead of falling back to defaults
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Toml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every resolved configuration value
    Show {
        /// Output format (text, json, or toml for an editable override file)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show the data file paths derived from the database directory
    Paths,
    /// Show the client route URLs derived from the base URL
    Urls {
        /// Output format (text, json, or toml)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Validate the override file and resolved values
    Check,
}

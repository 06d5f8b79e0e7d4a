//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clicklife - compose vehicle alert messages from GPS tracker text.
#[derive(Debug, Parser)]
#[command(name = "clicklife")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored dictionary
    #[arg(long, global = true, env = "CLICKLIFE_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Text format (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a vehicle/client dictionary file, replacing the stored one
    Load(LoadArgs),

    /// Compose an alert message from tracker text
    Alert(AlertArgs),

    /// Show which client a plate resolves to
    Resolve(ResolveArgs),

    /// Inspect or clear the stored dictionary
    Dictionary(DictionaryArgs),

    /// List supported alert types
    Types,
}

/// Arguments for the load command.
#[derive(Debug, Parser)]
pub struct LoadArgs {
    /// Text file with one `Vehicle<TAB>Client` row per line
    pub file: PathBuf,
}

/// Arguments for the alert command.
#[derive(Debug, Parser)]
pub struct AlertArgs {
    /// Alert type (towing, battery_disconnected, overspeed, stop_10_days, stop_in_geofence)
    #[arg(short = 't', long = "type")]
    pub alert_type: String,

    /// Tracker text given inline
    #[arg(long, conflicts_with_all = ["file", "stdin"])]
    pub text: Option<String>,

    /// Read tracker text from a file
    #[arg(long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read tracker text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Use this dictionary file instead of the stored one
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Plate to look up
    pub plate: String,

    /// Tracker text whose first line is also tried as a key
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for dictionary management.
#[derive(Debug, Parser)]
pub struct DictionaryArgs {
    #[command(subcommand)]
    pub action: DictionaryAction,
}

/// Dictionary management actions.
#[derive(Debug, Subcommand)]
pub enum DictionaryAction {
    /// List stored vehicles and clients
    List,

    /// Show how many vehicles are stored
    Count,

    /// Remove the stored dictionary
    Clear,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

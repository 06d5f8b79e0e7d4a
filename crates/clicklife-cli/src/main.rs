//! Clicklife CLI - compose vehicle alert messages from GPS tracker text.

use clap::Parser;
use clicklife_cli::commands;
use clicklife_cli::config::OutputFormat;
use clicklife_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = !cli.no_color;
    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::Text, color);
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> clicklife_cli::Result<()> {
    // Load config from the given path, or the default one
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    if let Command::Types = cli.command {
        return commands::execute_types(&formatter);
    }

    let session = Session::open(&config, cli.store_dir)?;

    match cli.command {
        Command::Load(args) => commands::execute_load(args, &session, &formatter),
        Command::Alert(args) => commands::execute_alert(args, &session, &formatter),
        Command::Resolve(args) => commands::execute_resolve(args, &session, &formatter),
        Command::Dictionary(args) => commands::execute_dictionary(args, &session, &formatter),
        Command::Types => commands::execute_types(&formatter),
    }
}

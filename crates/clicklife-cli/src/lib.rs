//! Clicklife CLI library.
//!
//! Command-line front end for the alert engine: uploads the vehicle/client
//! dictionary, composes alerts from pasted tracker text and prints the result.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;

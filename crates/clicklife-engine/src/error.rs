//! Error types for the engine

use std::fmt;
use thiserror::Error;

/// Which part of an alert request was left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    /// No tracking text was pasted
    TrackingText,

    /// No alert type was selected
    AlertType,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingInput::TrackingText => f.write_str("tracking text"),
            MissingInput::AlertType => f.write_str("alert type"),
        }
    }
}

/// Errors that can occur while generating an alert
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Request is missing tracking text or alert type
    #[error("Incomplete input: {0} is required")]
    UserInputIncomplete(MissingInput),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use clicklife_engine::EngineConfig;
use clicklife_store::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Where the dictionary is persisted
    #[serde(default)]
    pub storage: Storage,

    /// Message text fragments
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Dictionary storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storage {
    /// Directory holding the dictionary slot (defaults to `~/.clicklife/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Slot name
    #[serde(default = "default_slot")]
    pub slot: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Bare values only (message, client name, count)
    Quiet,
}

impl Config {
    /// Base directory for CLI state.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".clicklife"))
    }

    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.engine.validate()?;
        if config.storage.slot.trim().is_empty() {
            return Err(CliError::Config("storage.slot must not be empty".into()));
        }
        Ok(config)
    }

    /// Directory the dictionary slot lives in.
    pub fn store_dir(&self) -> Result<PathBuf> {
        match &self.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::home()?.join("data")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            dir: None,
            slot: default_slot(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert_eq!(config.storage.slot, "vehicles");
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            [settings]
            format = "json"

            [storage]
            dir = "/var/lib/clicklife"

            [engine]
            signature = "Fleet Desk"
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/var/lib/clicklife"));
        assert_eq!(config.storage.slot, "vehicles");
        assert_eq!(config.engine.signature, "Fleet Desk");
        assert_eq!(config.engine.greeting, EngineConfig::default().greeting);
    }

    #[test]
    fn test_invalid_engine_section() {
        let result = Config::from_toml("[engine]\ngreeting = \"\"\n");
        assert!(matches!(result, Err(CliError::Engine(_))));
    }

    #[test]
    fn test_empty_slot_rejected() {
        let result = Config::from_toml("[storage]\nslot = \" \"\n");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.storage.slot, "vehicles");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n\n[storage]\ndir = \"/srv/clicklife\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.settings.color);
        assert_eq!(loaded.storage.dir, Some(PathBuf::from("/srv/clicklife")));
    }
}

//! Configuration for message composition

use crate::error::EngineError;
use clicklife_domain::UNKNOWN_CLIENT;
use serde::{Deserialize, Serialize};

/// Fixed text fragments used when composing an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// First line of every message
    pub greeting: String,

    /// Last line of every message
    pub signature: String,

    /// Client name used when a vehicle cannot be resolved
    pub unknown_client: String,

    /// Prefix of the map link; `{lat},{lng}` is appended
    pub maps_url_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello, your vehicle has an event,".to_string(),
            signature: "Clicklife GPS System".to_string(),
            unknown_client: UNKNOWN_CLIENT.to_string(),
            maps_url_prefix: "https://www.google.com/maps?q=".to_string(),
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.greeting.trim().is_empty() {
            return Err(EngineError::Config("greeting must not be empty".to_string()));
        }
        if self.signature.trim().is_empty() {
            return Err(EngineError::Config("signature must not be empty".to_string()));
        }
        if self.unknown_client.trim().is_empty() {
            return Err(EngineError::Config("unknown_client must not be empty".to_string()));
        }
        if self.maps_url_prefix.trim().is_empty() {
            return Err(EngineError::Config("maps_url_prefix must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| EngineError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_signature_is_invalid() {
        let config = EngineConfig {
            signature: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml(r#"signature = "Fleet Desk""#).unwrap();
        assert_eq!(config.signature, "Fleet Desk");
        assert_eq!(config.unknown_client, UNKNOWN_CLIENT);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            EngineConfig::from_toml("greeting = "),
            Err(EngineError::Config(_))
        ));
    }
}

//! Core AlertEngine implementation

use crate::compose::compose_with;
use crate::config::EngineConfig;
use crate::dictionary::{build_with_sentinel, BuildReport};
use crate::error::{EngineError, MissingInput};
use crate::extract::extract_record;
use crate::resolve::resolve_with_stage;
use clicklife_domain::{AlertRequest, AlertResult, LookupTable};
use tracing::{debug, info};

/// Validates an alert request, then runs extract → resolve → compose
#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    config: EngineConfig,
}

impl AlertEngine {
    /// Create a new AlertEngine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a lookup table, filling blank client cells with the configured
    /// unknown-client name
    pub fn build_dictionary(&self, contents: &str) -> BuildReport {
        build_with_sentinel(contents, &self.config.unknown_client)
    }

    /// Generate an alert for one request against the current table.
    ///
    /// Fails only when the request is incomplete. Tracking text that is
    /// empty or whitespace-only counts as missing. An unmatched vehicle
    /// resolves to the configured unknown-client name.
    pub fn generate(
        &self,
        request: &AlertRequest,
        table: &LookupTable,
    ) -> Result<AlertResult, EngineError> {
        if request.tracking_text.trim().is_empty() {
            return Err(EngineError::UserInputIncomplete(MissingInput::TrackingText));
        }
        let alert_type = request
            .alert_type
            .as_ref()
            .ok_or(EngineError::UserInputIncomplete(MissingInput::AlertType))?;

        let record = extract_record(&request.tracking_text);
        debug!(plate = %record.plate, descriptor = %record.descriptor, "Extracted tracking record");

        let resolution = resolve_with_stage(&record.plate, &request.tracking_text, table);
        let client = resolution.client_or(&self.config.unknown_client).to_string();

        let message = compose_with(&self.config, alert_type, &record, &client);
        info!(
            alert_type = %alert_type,
            stage = %resolution.stage,
            "Composed alert"
        );

        Ok(AlertResult {
            resolved_client: client,
            message,
        })
    }
}

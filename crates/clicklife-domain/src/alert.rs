//! Alert module - what happened to a vehicle, and the request/result pair
//! exchanged with the presentation layer.

use std::fmt;

/// Kind of event an alert reports
///
/// Unrecognized values are kept verbatim in [`AlertType::Other`] so a
/// message can still be composed with a generic phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertType {
    /// Vehicle was towed or loaded onto a recovery truck
    Towing,

    /// External (vehicle) battery was disconnected from the tracker
    BatteryDisconnected,

    /// Vehicle exceeded the speed limit
    Overspeed,

    /// Vehicle has not moved for 10 days
    StopTenDays,

    /// Vehicle stopped inside a geofence
    StopInGeofence,

    /// Any other event name
    Other(String),
}

impl AlertType {
    /// Get the canonical alert type name
    pub fn as_str(&self) -> &str {
        match self {
            AlertType::Towing => "towing",
            AlertType::BatteryDisconnected => "battery_disconnected",
            AlertType::Overspeed => "overspeed",
            AlertType::StopTenDays => "stop_10_days",
            AlertType::StopInGeofence => "stop_in_geofence",
            AlertType::Other(raw) => raw,
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &str {
        match self {
            AlertType::Towing => "Towing",
            AlertType::BatteryDisconnected => "Battery Disconnected",
            AlertType::Overspeed => "Overspeed",
            AlertType::StopTenDays => "Stop for 10 Days",
            AlertType::StopInGeofence => "Stop in Geofence",
            AlertType::Other(raw) => raw,
        }
    }

    /// Every recognized alert type, in display order
    pub fn all() -> [AlertType; 5] {
        [
            AlertType::Towing,
            AlertType::BatteryDisconnected,
            AlertType::Overspeed,
            AlertType::StopTenDays,
            AlertType::StopInGeofence,
        ]
    }

    /// Parse an alert type from user input.
    ///
    /// Accepts canonical names, the legacy form values
    /// (`"external battery disconnected"`, `"stop for 10 day"`, ...) and the
    /// display labels, case-insensitively. Blank input yields `None`; any
    /// other unknown value becomes [`AlertType::Other`].
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        let parsed = match lowered.as_str() {
            "towing" => AlertType::Towing,
            "battery_disconnected"
            | "battery disconnected"
            | "external battery disconnected" => AlertType::BatteryDisconnected,
            "overspeed" => AlertType::Overspeed,
            "stop_10_days" | "stop for 10 day" | "stop for 10 days" => AlertType::StopTenDays,
            "stop_in_geofence" | "stop in geofence" => AlertType::StopInGeofence,
            _ => AlertType::Other(trimmed.to_string()),
        };
        Some(parsed)
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlertType::parse(s).ok_or_else(|| "alert type cannot be empty".to_string())
    }
}

/// Request to compose one alert message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    /// Raw tracker status text, pasted as-is
    pub tracking_text: String,

    /// Selected alert type; `None` when the user has not chosen one
    pub alert_type: Option<AlertType>,
}

impl AlertRequest {
    /// Create a request with a known alert type
    pub fn new(tracking_text: impl Into<String>, alert_type: AlertType) -> Self {
        Self {
            tracking_text: tracking_text.into(),
            alert_type: Some(alert_type),
        }
    }

    /// Create a request from raw form values
    pub fn from_raw(tracking_text: impl Into<String>, alert_type: &str) -> Self {
        Self {
            tracking_text: tracking_text.into(),
            alert_type: AlertType::parse(alert_type),
        }
    }
}

/// Outcome of a successful composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertResult {
    /// Resolved client name, or the `UNKNOWN CLIENT` sentinel
    pub resolved_client: String,

    /// Composed alert message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for alert_type in AlertType::all() {
            assert_eq!(AlertType::parse(alert_type.as_str()), Some(alert_type.clone()));
        }
    }

    #[test]
    fn test_parse_legacy_values() {
        assert_eq!(
            AlertType::parse("external battery disconnected"),
            Some(AlertType::BatteryDisconnected)
        );
        assert_eq!(AlertType::parse("stop for 10 day"), Some(AlertType::StopTenDays));
        assert_eq!(AlertType::parse("Stop in Geofence"), Some(AlertType::StopInGeofence));
        assert_eq!(AlertType::parse("OVERSPEED"), Some(AlertType::Overspeed));
    }

    #[test]
    fn test_parse_labels() {
        for alert_type in AlertType::all() {
            assert_eq!(AlertType::parse(alert_type.label()), Some(alert_type.clone()));
        }
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert_eq!(
            AlertType::parse(" door open "),
            Some(AlertType::Other("door open".to_string()))
        );
        assert_eq!(AlertType::parse("   "), None);
        assert!("".parse::<AlertType>().is_err());
    }

    #[test]
    fn test_parse_rejects_shorthand_names() {
        for raw in ["battery", "recovery", "speeding", "geofence", "over speed", "stop-in-geofence"] {
            assert_eq!(AlertType::parse(raw), Some(AlertType::Other(raw.to_string())));
        }
    }

    #[test]
    fn test_request_from_raw() {
        let request = AlertRequest::from_raw("657014", "");
        assert!(request.alert_type.is_none());

        let request = AlertRequest::from_raw("657014", "towing");
        assert_eq!(request.alert_type, Some(AlertType::Towing));
    }
}

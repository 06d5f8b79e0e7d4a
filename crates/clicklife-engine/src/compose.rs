//! Alert message templating

use crate::config::EngineConfig;
use clicklife_domain::{collapse_whitespace, AlertType, TrackingRecord};

/// Phrase describing what happened to the vehicle
///
/// `speed_kph` is only used for [`AlertType::Overspeed`].
pub fn phrase(alert_type: &AlertType, speed_kph: Option<&str>) -> String {
    let fixed = match alert_type {
        AlertType::Towing => "was on recovery",
        AlertType::BatteryDisconnected => "had the external battery disconnected",
        AlertType::Overspeed => match speed_kph.filter(|s| !s.is_empty()) {
            Some(speed) => return format!("was speeding {} kph", speed),
            None => "was speeding",
        },
        AlertType::StopTenDays => "has stopped for 10 days",
        AlertType::StopInGeofence => "has stopped in geofence",
        AlertType::Other(_) => "had an event",
    };
    fixed.to_string()
}

/// Compose an alert message with the default greeting and signature
pub fn compose(alert_type: &AlertType, record: &TrackingRecord, client: &str) -> String {
    compose_with(&EngineConfig::default(), alert_type, record, client)
}

/// Compose an alert message.
///
/// Lines are, in order: greeting, event line, map link (only when both
/// coordinates are present), signature. Blank lines are dropped and the rest
/// joined as paragraphs.
pub fn compose_with(
    config: &EngineConfig,
    alert_type: &AlertType,
    record: &TrackingRecord,
    client: &str,
) -> String {
    let event = collapse_whitespace(&format!(
        "{} {} {} {} ({})",
        client,
        record.plate,
        record.descriptor,
        phrase(alert_type, record.speed_kph.as_deref()),
        record.address
    ));
    let map_link = record
        .coordinates()
        .map(|(lat, lng)| format!("{}{},{}", config.maps_url_prefix, lat, lng))
        .unwrap_or_default();

    [config.greeting.clone(), event, map_link, config.signature.clone()]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

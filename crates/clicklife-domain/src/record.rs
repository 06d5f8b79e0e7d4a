//! Tracking record - the structured view of one pasted status dump.

/// Fields extracted from a tracker status text
///
/// Created fresh for each request. Every field tolerates absence: missing
/// markers leave the corresponding string empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingRecord {
    /// Leading vehicle identifier
    pub plate: String,

    /// Free text following the plate on the vehicle line (model, color)
    pub descriptor: String,

    /// Text after `Address:`, trimmed
    pub address: String,

    /// Value after `Latitude:`
    pub latitude: String,

    /// Value after `Longitude:`
    pub longitude: String,

    /// Value between `Speed:` and a `kph` unit
    pub speed_kph: Option<String>,
}

impl TrackingRecord {
    /// Latitude/longitude pair, present only when both values are non-empty
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        if self.latitude.is_empty() || self.longitude.is_empty() {
            None
        } else {
            Some((&self.latitude, &self.longitude))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_require_both() {
        let mut record = TrackingRecord {
            latitude: "25.411".to_string(),
            ..Default::default()
        };
        assert!(record.coordinates().is_none());

        record.longitude = "55.435".to_string();
        assert_eq!(record.coordinates(), Some(("25.411", "55.435")));
    }
}

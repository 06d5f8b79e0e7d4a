//! Lookup table module - vehicle identifier to client name mapping

use crate::normalize::{loose_key, normalize_key, strip_non_alnum};
use std::collections::BTreeMap;

/// Vehicle identifier → client name mapping
///
/// Every row is stored under its normalized key (ASCII alphanumerics,
/// lower-cased). When the loose form of the identifier (trimmed,
/// lower-cased, punctuation kept) differs from the normalized key it is
/// recorded as an alias as well, so queries carrying the original
/// punctuation still hit an exact key.
///
/// Later inserts overwrite earlier ones sharing a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    primary: BTreeMap<String, String>,
    aliases: BTreeMap<String, String>,
}

impl LookupTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row keyed by a raw vehicle identifier.
    ///
    /// Returns `false` (and stores nothing) when the identifier normalizes
    /// to an empty key.
    pub fn insert(&mut self, raw_vehicle: &str, client: impl Into<String>) -> bool {
        let key = normalize_key(raw_vehicle);
        if key.is_empty() {
            return false;
        }

        let client = client.into();
        let alias = loose_key(raw_vehicle);
        if alias != key {
            self.aliases.insert(alias, client.clone());
        }
        self.primary.insert(key, client);
        true
    }

    /// Exact lookup: primary keys first, then aliases
    pub fn get(&self, key: &str) -> Option<&str> {
        self.primary
            .get(key)
            .or_else(|| self.aliases.get(key))
            .map(String::as_str)
    }

    /// Scan every stored key with non-alphanumerics stripped and return the
    /// first whose stripped form equals `clean`.
    ///
    /// Keys are visited primary first, each map in sorted order.
    pub fn scan_stripped(&self, clean: &str) -> Option<&str> {
        if clean.is_empty() {
            return None;
        }
        self.primary
            .iter()
            .chain(self.aliases.iter())
            .find(|(key, _)| strip_non_alnum(key) == clean)
            .map(|(_, client)| client.as_str())
    }

    /// Number of distinct vehicles (normalized keys)
    pub fn vehicle_count(&self) -> usize {
        self.primary.len()
    }

    /// Number of flat entries, aliases included
    pub fn entry_count(&self) -> usize {
        self.primary.len() + self.aliases.len()
    }

    /// Check whether the table holds no vehicles
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.aliases.is_empty()
    }

    /// Iterate normalized key → client pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.primary.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Flatten into a single string → string mapping (primary keys and aliases)
    pub fn to_flat(&self) -> BTreeMap<String, String> {
        let mut flat = self.aliases.clone();
        flat.extend(self.primary.iter().map(|(k, v)| (k.clone(), v.clone())));
        flat
    }

    /// Rebuild a table from a flat mapping.
    ///
    /// A key equal to its own normalized form is primary; everything else is
    /// an alias. No entry is dropped.
    pub fn from_flat<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = Self::new();
        for (key, client) in entries {
            if !key.is_empty() && normalize_key(&key) == key {
                table.primary.insert(key, client);
            } else {
                table.aliases.insert(key, client);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_alias_only_when_different() {
        let mut table = LookupTable::new();
        assert!(table.insert("657014", "Al Futtaim"));
        assert_eq!(table.vehicle_count(), 1);
        assert_eq!(table.entry_count(), 1);

        assert!(table.insert("AB-123", "Emirates Transport"));
        assert_eq!(table.vehicle_count(), 2);
        assert_eq!(table.entry_count(), 3);
        assert_eq!(table.get("ab123"), Some("Emirates Transport"));
        assert_eq!(table.get("ab-123"), Some("Emirates Transport"));
    }

    #[test]
    fn test_insert_rejects_empty_key() {
        let mut table = LookupTable::new();
        assert!(!table.insert("***", "Nobody"));
        assert!(!table.insert(" - ", "Nobody"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = LookupTable::new();
        table.insert("AB-123", "First");
        table.insert("ab123", "Second");
        assert_eq!(table.get("ab123"), Some("Second"));
        // Alias from the first row is untouched
        assert_eq!(table.get("ab-123"), Some("First"));
    }

    #[test]
    fn test_scan_stripped() {
        let table = LookupTable::from_flat([("ab-12.3".to_string(), "Dubai Taxi".to_string())]);
        assert_eq!(table.get("ab123"), None);
        assert_eq!(table.scan_stripped("ab123"), Some("Dubai Taxi"));
        assert_eq!(table.scan_stripped(""), None);
    }

    #[test]
    fn test_flat_round_trip_preserves_lookups() {
        let mut table = LookupTable::new();
        table.insert("AB-123", "Emirates Transport");
        table.insert("657014", "Al Futtaim");

        let rebuilt = LookupTable::from_flat(table.to_flat());
        assert_eq!(rebuilt, table);
        assert_eq!(rebuilt.vehicle_count(), 2);
    }
}

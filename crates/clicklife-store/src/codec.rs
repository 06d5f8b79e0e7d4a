//! Flat JSON encoding of a lookup table

use crate::error::StoreError;
use clicklife_domain::LookupTable;
use std::collections::BTreeMap;
use tracing::warn;

pub(crate) fn encode(table: &LookupTable) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(&table.to_flat())?)
}

/// Decode a stored slot; anything unparsable becomes an empty table.
pub(crate) fn decode(raw: &str) -> LookupTable {
    if raw.trim().is_empty() {
        return LookupTable::new();
    }
    match serde_json::from_str::<BTreeMap<String, String>>(raw) {
        Ok(flat) => LookupTable::from_flat(flat),
        Err(e) => {
            warn!("Discarding unreadable dictionary state: {}", e);
            LookupTable::new()
        }
    }
}

//! In-memory dictionary slot, for tests and embedding

use crate::codec::{decode, encode};
use crate::error::StoreError;
use clicklife_domain::{DictionaryStore, LookupTable};
use std::sync::Mutex;

/// Holds the serialized slot in memory, exactly as a file would
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose slot already holds `raw`
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Current raw slot contents
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DictionaryStore for MemoryStore {
    type Error = StoreError;

    fn load(&self) -> Result<LookupTable, StoreError> {
        Ok(self.raw().map(|raw| decode(&raw)).unwrap_or_default())
    }

    fn save(&self, table: &LookupTable) -> Result<(), StoreError> {
        let encoded = encode(table)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        let mut table = LookupTable::new();
        table.insert("657014", "Al Futtaim");

        store.save(&table).unwrap();
        assert_eq!(store.load().unwrap(), table);

        store.clear().unwrap();
        assert!(store.raw().is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let store = MemoryStore::with_raw("{{{");
        assert!(store.load().unwrap().is_empty());
    }
}

//! Shared handle to the current lookup table
//!
//! Readers take a snapshot (`Arc`) and keep using it even if a new table is
//! published meanwhile. A new table is built completely before it is
//! swapped in, so a reader never sees a partial table.

use clicklife_domain::{DictionaryStore, LookupTable};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Copy-on-write holder of the session's lookup table
#[derive(Debug, Clone, Default)]
pub struct TableHandle {
    current: Arc<RwLock<Arc<LookupTable>>>,
}

impl TableHandle {
    /// Create a handle publishing `table`
    pub fn new(table: LookupTable) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    /// Create a handle from whatever `store` currently holds
    pub fn load_from<S: DictionaryStore>(store: &S) -> Result<Self, S::Error> {
        Ok(Self::new(store.load()?))
    }

    /// Current table
    pub fn snapshot(&self) -> Arc<LookupTable> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Publish a fully built table, returning the one it replaces
    pub fn replace(&self, table: LookupTable) -> Arc<LookupTable> {
        let next = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, next)
    }

    /// Persist `table` to `store`, then publish it.
    ///
    /// Nothing is published if saving fails.
    pub fn replace_and_save<S: DictionaryStore>(
        &self,
        store: &S,
        table: LookupTable,
    ) -> Result<Arc<LookupTable>, S::Error> {
        store.save(&table)?;
        let vehicles = table.vehicle_count();
        let previous = self.replace(table);
        info!(vehicles, "Published new dictionary");
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn table(vehicle: &str, client: &str) -> LookupTable {
        let mut table = LookupTable::new();
        table.insert(vehicle, client);
        table
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let handle = TableHandle::new(table("657014", "Old"));
        let before = handle.snapshot();

        let previous = handle.replace(table("657014", "New"));

        assert_eq!(before.get("657014"), Some("Old"));
        assert_eq!(previous.get("657014"), Some("Old"));
        assert_eq!(handle.snapshot().get("657014"), Some("New"));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let handle = TableHandle::new(table("111", "A"));
        handle.replace(table("222", "B"));
        let current = handle.snapshot();
        assert_eq!(current.get("111"), None);
        assert_eq!(current.vehicle_count(), 1);
    }

    #[test]
    fn test_replace_and_save() {
        let store = MemoryStore::new();
        let handle = TableHandle::default();

        handle.replace_and_save(&store, table("657014", "Al Futtaim")).unwrap();

        assert_eq!(handle.snapshot().get("657014"), Some("Al Futtaim"));
        let reloaded = TableHandle::load_from(&store).unwrap();
        assert_eq!(reloaded.snapshot(), handle.snapshot());
    }

    #[test]
    fn test_clones_share_state() {
        let handle = TableHandle::default();
        let other = handle.clone();
        handle.replace(table("657014", "Al Futtaim"));
        assert_eq!(other.snapshot().vehicle_count(), 1);
    }
}

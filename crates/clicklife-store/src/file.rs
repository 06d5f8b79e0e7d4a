//! File-backed dictionary slot

use crate::codec::{decode, encode};
use crate::error::StoreError;
use clicklife_domain::{DictionaryStore, LookupTable};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

/// Stores one dictionary as `<dir>/<slot>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    slot: String,
}

impl FileStore {
    /// Create a store for `slot` under `dir`.
    ///
    /// # Errors
    /// Returns error if the slot name is empty or contains path separators
    pub fn new(dir: impl Into<PathBuf>, slot: impl Into<String>) -> Result<Self, StoreError> {
        let slot = slot.into();
        if slot.trim().is_empty() || slot.contains(['/', '\\']) || slot.starts_with('.') {
            return Err(StoreError::InvalidSlot(slot));
        }
        Ok(Self {
            dir: dir.into(),
            slot,
        })
    }

    /// Full path of the slot file
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", self.slot))
    }
}

impl DictionaryStore for FileStore {
    type Error = StoreError;

    fn load(&self) -> Result<LookupTable, StoreError> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(decode(&raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(LookupTable::new()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Dictionary slot {} is not valid UTF-8, ignoring it", path.display());
                Ok(LookupTable::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, table: &LookupTable) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        // Write aside, then rename over the slot
        let temp = self.temp_path();
        fs::write(&temp, encode(table)?)?;
        fs::rename(&temp, self.path())?;

        info!(
            slot = %self.slot,
            vehicles = table.vehicle_count(),
            "Saved dictionary"
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

//! Per-invocation session: the stored dictionary, its shared handle and the
//! engine configured for this run.

use crate::config::Config;
use crate::error::Result;
use clicklife_domain::{DictionaryStore, LookupTable};
use clicklife_engine::AlertEngine;
use clicklife_store::{FileStore, TableHandle};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a command needs to run.
pub struct Session {
    store: FileStore,
    handle: TableHandle,
    engine: AlertEngine,
}

impl Session {
    /// Open the dictionary slot named in `config`, optionally in another directory.
    pub fn open(config: &Config, store_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match store_dir {
            Some(dir) => dir,
            None => config.store_dir()?,
        };
        let store = FileStore::new(dir, config.storage.slot.clone())?;
        let handle = TableHandle::load_from(&store)?;

        Ok(Self {
            store,
            handle,
            engine: AlertEngine::new(config.engine.clone()),
        })
    }

    /// Current dictionary.
    pub fn table(&self) -> Arc<LookupTable> {
        self.handle.snapshot()
    }

    /// Persist `table` and make it current.
    pub fn publish(&self, table: LookupTable) -> Result<()> {
        self.handle.replace_and_save(&self.store, table)?;
        Ok(())
    }

    /// Remove the stored dictionary.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        self.handle.replace(LookupTable::new());
        Ok(())
    }

    /// Alert engine for this run.
    pub fn engine(&self) -> &AlertEngine {
        &self.engine
    }

    /// Underlying store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

//! Trait definitions for external interactions
//!
//! The engine never owns persisted state; the dictionary is loaded and saved
//! by whoever drives it, through this seam.

use crate::LookupTable;

/// Trait for persisting the current dictionary between sessions
///
/// Implemented by the infrastructure layer (clicklife-store)
pub trait DictionaryStore {
    /// Error type for store operations
    type Error;

    /// Load the stored table; missing or unreadable state yields an empty table
    fn load(&self) -> Result<LookupTable, Self::Error>;

    /// Replace the stored table wholesale
    fn save(&self, table: &LookupTable) -> Result<(), Self::Error>;

    /// Remove any stored table
    fn clear(&self) -> Result<(), Self::Error>;
}

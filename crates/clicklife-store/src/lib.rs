//! Clicklife Store
//!
//! Persistence for the vehicle dictionary between sessions, and a shared
//! handle that publishes a newly uploaded table in a single swap.
//!
//! The stored form is a flat JSON object of lookup key → client name kept in
//! one named slot. Loading never fails on bad content: a slot that cannot be
//! parsed is logged and treated as empty.

#![warn(missing_docs)]

mod codec;
mod error;
mod file;
mod handle;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use handle::TableHandle;
pub use memory::MemoryStore;

/// Slot name used when none is configured
pub const DEFAULT_SLOT: &str = "vehicles";

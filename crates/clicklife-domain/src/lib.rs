//! Clicklife Domain Layer
//!
//! Core types shared by every other crate in the workspace. Like any domain
//! layer it has no external dependencies: it defines the value objects that
//! flow through an alert request and the trait seam for dictionary
//! persistence, nothing more.
//!
//! ## Key Concepts
//!
//! - **Plate**: short vehicle identifier token, the primary lookup key
//! - **LookupTable**: vehicle identifier → client name, built from an uploaded file
//! - **TrackingRecord**: fields pulled out of one pasted tracker status dump
//! - **AlertType**: the kind of event being reported
//! - **UNKNOWN CLIENT**: the fallback client name when resolution fails

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alert;
pub mod normalize;
pub mod record;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use alert::{AlertRequest, AlertResult, AlertType};
pub use normalize::{collapse_whitespace, loose_key, normalize_key, strip_non_alnum, UNKNOWN_CLIENT};
pub use record::TrackingRecord;
pub use table::LookupTable;
pub use traits::DictionaryStore;

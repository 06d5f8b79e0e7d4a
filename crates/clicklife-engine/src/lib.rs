//! Clicklife Engine
//!
//! Turns a pasted GPS-tracker status dump and a vehicle → client dictionary
//! into a customer-facing alert message.
//!
//! # Architecture
//!
//! ```text
//! Dictionary file → build → LookupTable
//!                                 │
//! Tracking text → extract → TrackingRecord → resolve → client → compose → message
//! ```
//!
//! Every stage is a pure function of its inputs. The only error a caller can
//! see is [`EngineError::UserInputIncomplete`]; an unmatched vehicle resolves
//! to `UNKNOWN CLIENT` and composition carries on.
//!
//! # Example Usage
//!
//! ```
//! use clicklife_domain::{AlertRequest, AlertType};
//! use clicklife_engine::{build, AlertEngine};
//!
//! let table = build("657014\tAl Futtaim\n");
//! let engine = AlertEngine::default();
//!
//! let request = AlertRequest::new(
//!     "657014 Changan White\nAddress: New Industrial, Ajman, UAE\nSpeed: 105 kph",
//!     AlertType::Overspeed,
//! );
//!
//! let result = engine.generate(&request, &table).unwrap();
//! assert_eq!(result.resolved_client, "Al Futtaim");
//! assert!(result.message.contains("was speeding 105 kph"));
//! ```

#![warn(missing_docs)]

mod compose;
mod config;
mod dictionary;
mod engine;
mod error;
mod extract;
mod resolve;

pub use compose::{compose, compose_with, phrase};
pub use config::EngineConfig;
pub use dictionary::{build, build_with_report, build_with_sentinel, BuildReport};
pub use engine::AlertEngine;
pub use error::{EngineError, MissingInput};
pub use extract::{extract_plate, extract_record, first_line, vehicle_line};
pub use resolve::{resolve, resolve_with_stage, MatchStage, Resolution};

//! Client resolution: match a plate against the lookup table

use crate::extract::first_line;
use clicklife_domain::{strip_non_alnum, LookupTable, UNKNOWN_CLIENT};
use std::fmt;
use tracing::debug;

/// Stage of the lookup cascade that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    /// Plate with non-alphanumerics stripped, lower-cased
    NormalizedPlate,
    /// Plate trimmed and lower-cased, punctuation kept
    LoosePlate,
    /// Whole first line of the tracking text
    FirstLine,
    /// Scan of every key with non-alphanumerics stripped
    StrippedScan,
    /// Nothing matched
    Unresolved,
}

impl MatchStage {
    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStage::NormalizedPlate => "normalized-plate",
            MatchStage::LoosePlate => "loose-plate",
            MatchStage::FirstLine => "first-line",
            MatchStage::StrippedScan => "stripped-scan",
            MatchStage::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the lookup cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Matched client name, if any
    pub client: Option<&'a str>,

    /// Stage that matched
    pub stage: MatchStage,
}

impl<'a> Resolution<'a> {
    /// Matched client, or `fallback` when unresolved
    pub fn client_or(&self, fallback: &'a str) -> &'a str {
        self.client.unwrap_or(fallback)
    }
}

/// Resolve a plate to a client name, falling back to `UNKNOWN CLIENT`.
///
/// Use [`resolve_with_stage`] with [`Resolution::client_or`] for a configured
/// fallback name.
pub fn resolve(plate: &str, tracking_text: &str, table: &LookupTable) -> String {
    resolve_with_stage(plate, tracking_text, table)
        .client_or(UNKNOWN_CLIENT)
        .to_string()
}

/// Run the lookup cascade; the first stage to match wins
pub fn resolve_with_stage<'a>(
    plate: &str,
    tracking_text: &str,
    table: &'a LookupTable,
) -> Resolution<'a> {
    let loose = plate.trim().to_lowercase();
    let clean = strip_non_alnum(&loose);
    let line = first_line(tracking_text).trim().to_lowercase();

    let lookups = [
        (MatchStage::NormalizedPlate, table.get(&clean)),
        (MatchStage::LoosePlate, table.get(&loose)),
        (MatchStage::FirstLine, table.get(&line)),
    ];
    let hit = lookups
        .into_iter()
        .find(|(_, client)| client.is_some())
        .or_else(|| {
            table
                .scan_stripped(&clean)
                .map(|client| (MatchStage::StrippedScan, Some(client)))
        });

    let resolution = match hit {
        Some((stage, client)) => Resolution { client, stage },
        None => Resolution {
            client: None,
            stage: MatchStage::Unresolved,
        },
    };
    debug!(plate, stage = %resolution.stage, "Resolved plate");
    resolution
}

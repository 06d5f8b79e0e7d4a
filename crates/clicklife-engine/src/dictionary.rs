//! Build a lookup table from an uploaded vehicle/client text file

use clicklife_domain::{LookupTable, UNKNOWN_CLIENT};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace run regex"));

/// Table plus bookkeeping about how the source file was read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// The built table
    pub table: LookupTable,

    /// Non-blank lines seen, header included
    pub lines_read: usize,

    /// Whether the first non-blank line was discarded as a header
    pub header_skipped: bool,

    /// Data lines that yielded no usable vehicle key
    pub lines_skipped: usize,
}

impl BuildReport {
    /// Number of distinct vehicles loaded
    pub fn vehicle_count(&self) -> usize {
        self.table.vehicle_count()
    }
}

/// Parse file contents into a fresh lookup table.
///
/// Never fails: a file with no usable rows gives an empty table.
pub fn build(contents: &str) -> LookupTable {
    build_with_report(contents).table
}

/// Same as [`build`], also reporting line counts
pub fn build_with_report(contents: &str) -> BuildReport {
    build_with_sentinel(contents, UNKNOWN_CLIENT)
}

/// Same as [`build_with_report`], with `unknown_client` for blank client cells
pub fn build_with_sentinel(contents: &str, unknown_client: &str) -> BuildReport {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut report = BuildReport::default();
    let mut header_checked = false;

    for raw in contents.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        report.lines_read += 1;

        // Only the first non-blank line is ever considered as a header
        if !header_checked {
            header_checked = true;
            if is_header(line) {
                report.header_skipped = true;
                continue;
            }
        }

        let (vehicle, client) = split_row(line);
        let client = client.trim();
        let client = if client.is_empty() { unknown_client } else { client };

        if !report.table.insert(vehicle, client) {
            debug!("Skipping line without a vehicle key: {:?}", line);
            report.lines_skipped += 1;
        }
    }

    info!(
        vehicles = report.table.vehicle_count(),
        skipped = report.lines_skipped,
        header = report.header_skipped,
        "Built lookup table"
    );
    report
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("vehicle") && lower.contains("client")
}

/// Split a row into (vehicle, client): tab, else comma, else 2+ whitespace.
fn split_row(line: &str) -> (&str, &str) {
    let fields: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else if line.contains(',') {
        line.split(',').collect()
    } else {
        WHITESPACE_RUN.split(line).collect()
    };

    let vehicle = fields.first().copied().unwrap_or("");
    let client = fields.get(1).copied().unwrap_or("");
    (vehicle, client)
}

//! Marker-based field extraction from free-form tracker text
//!
//! Each field has its own small extractor keyed on a literal marker
//! (`Address:`, `Latitude:`, ...). Extractors are independent and tolerate a
//! missing marker, so the order and layout of the pasted dump do not matter.

use clicklife_domain::{collapse_whitespace, TrackingRecord};
use once_cell::sync::Lazy;
use regex::Regex;

const ADDRESS_MARKER: &str = "Address:";

static PLATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s-]*").expect("plate regex"));
static ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Address:\s*(.+)").expect("address regex"));
static LATITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Latitude:\s*([0-9.\-]+)").expect("latitude regex"));
static LONGITUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Longitude:\s*([0-9.\-]+)").expect("longitude regex"));
// Unit is case-insensitive and the trailing `h` is optional; the marker is not.
static SPEED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Speed:\s*([0-9.]+)\s*(?i:kph?)").expect("speed regex"));

/// First line of the text, untrimmed
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// The line describing the vehicle.
///
/// With an `Address:` marker this is everything before it, newlines removed
/// and trimmed; otherwise the first line.
pub fn vehicle_line(text: &str) -> String {
    match text.find(ADDRESS_MARKER) {
        Some(idx) => text[..idx].replace('\n', "").trim().to_string(),
        None => first_line(text).to_string(),
    }
}

/// Extract the plate from tracking text
pub fn extract_plate(text: &str) -> String {
    plate_from_line(&vehicle_line(text))
}

fn plate_from_line(line: &str) -> String {
    let leading = PLATE.find(line).map(|m| m.as_str()).unwrap_or_default();
    let candidate = if leading.is_empty() {
        line.split_whitespace().next().unwrap_or_default()
    } else {
        leading
    };
    candidate.replace('*', "").trim().to_string()
}

fn extract_descriptor(line: &str, plate: &str) -> String {
    collapse_whitespace(&line.replacen(plate, "", 1))
}

fn extract_address(text: &str) -> String {
    capture(&ADDRESS, text).trim().to_string()
}

fn extract_speed(text: &str) -> Option<String> {
    let speed = capture(&SPEED, text);
    (!speed.is_empty()).then(|| speed.to_string())
}

fn capture<'t>(re: &Regex, text: &'t str) -> &'t str {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default()
}

/// Extract every known field from tracking text
pub fn extract_record(text: &str) -> TrackingRecord {
    let line = vehicle_line(text);
    let plate = plate_from_line(&line);
    let descriptor = extract_descriptor(&line, &plate);

    TrackingRecord {
        descriptor,
        address: extract_address(text),
        latitude: capture(&LATITUDE, text).to_string(),
        longitude: capture(&LONGITUDE, text).to_string(),
        speed_kph: extract_speed(text),
        plate,
    }
}

//! Integration tests for clicklife-cli
//!
//! These tests drive the command layer against a temporary store directory.

use clap::Parser;
use clicklife_cli::commands::alert::generate_alert;
use clicklife_cli::commands::load::load_dictionary;
use clicklife_cli::config::OutputFormat;
use clicklife_cli::{Cli, Command, Config, Formatter, Session};
use std::fs;
use tempfile::TempDir;

const TRACKING: &str = "657014 Changan White
Address: New Industrial, Ajman, UAE
Latitude: 25.411
Longitude: 55.435
Speed: 105 kph";

fn open(dir: &TempDir) -> Session {
    Session::open(&Config::default(), Some(dir.path().join("store"))).unwrap()
}

#[test]
fn test_upload_then_alert() {
    let dir = TempDir::new().unwrap();
    let dictionary = dir.path().join("fleet.txt");
    fs::write(&dictionary, "Vehicle\tClient\r\n657014\tAl Futtaim\r\n").unwrap();

    load_dictionary(&dictionary, &open(&dir)).unwrap();

    // A later invocation sees the stored dictionary
    let cli = Cli::parse_from(["clicklife", "alert", "--type", "overspeed", "--text", TRACKING]);
    let Command::Alert(args) = cli.command else {
        panic!("Expected Alert command");
    };
    let result = generate_alert(&args, TRACKING.to_string(), &open(&dir)).unwrap();

    assert_eq!(result.resolved_client, "Al Futtaim");
    assert_eq!(
        result.message,
        "Hello, your vehicle has an event,\n\n\
         Al Futtaim 657014 Changan White was speeding 105 kph (New Industrial, Ajman, UAE)\n\n\
         https://www.google.com/maps?q=25.411,55.435\n\n\
         Clicklife GPS System"
    );

    let json = Formatter::new(OutputFormat::Json, false).alert(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["client"], "Al Futtaim");
}

#[test]
fn test_corrupt_store_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let store_dir = dir.path().join("store");
    fs::create_dir_all(&store_dir).unwrap();
    fs::write(store_dir.join("vehicles.json"), "not json at all").unwrap();

    let session = open(&dir);
    assert!(session.table().is_empty());

    let cli = Cli::parse_from(["clicklife", "alert", "-t", "towing", "--text", TRACKING]);
    let Command::Alert(args) = cli.command else {
        panic!("Expected Alert command");
    };
    let result = generate_alert(&args, TRACKING.to_string(), &session).unwrap();
    assert_eq!(result.resolved_client, "UNKNOWN CLIENT");
}

#[test]
fn test_custom_signature_from_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[engine]\nsignature = \"Fleet Desk\"\n[storage]\nslot = \"fleet\"\n",
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let session = Session::open(&config, Some(dir.path().join("store"))).unwrap();
    assert!(session.store().path().ends_with("fleet.json"));

    let cli = Cli::parse_from(["clicklife", "alert", "-t", "stop_10_days", "--text", TRACKING]);
    let Command::Alert(args) = cli.command else {
        panic!("Expected Alert command");
    };
    let result = generate_alert(&args, TRACKING.to_string(), &session).unwrap();
    assert!(result.message.contains("has stopped for 10 days"));
    assert!(result.message.ends_with("Fleet Desk"));
}

//! Load command implementation.

use crate::cli::LoadArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use clicklife_engine::BuildReport;
use std::fs;
use std::path::Path;

/// Execute the load command.
pub fn execute_load(args: LoadArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let report = load_dictionary(&args.file, session)?;
    println!(
        "{}",
        formatter.load_report(&args.file.display().to_string(), &report)?
    );
    Ok(())
}

/// Build a dictionary from `path` and make it the stored one.
///
/// The previous dictionary is replaced even when the new file has no usable
/// rows.
pub fn load_dictionary(path: &Path, session: &Session) -> Result<BuildReport> {
    let contents = read_text_lossy(path)?;
    let report = session.engine().build_dictionary(&contents);
    session.publish(report.table.clone())?;
    Ok(report)
}

/// Read a text file, replacing invalid UTF-8 rather than failing.
pub(crate) fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_load_dictionary_replaces_stored_table() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(&Config::default(), Some(dir.path().join("data"))).unwrap();

        let first = dir.path().join("first.txt");
        fs::write(&first, "Vehicle\tClient\n657014\tAl Futtaim\n").unwrap();
        let report = load_dictionary(&first, &session).unwrap();
        assert_eq!(report.vehicle_count(), 1);

        let second = dir.path().join("second.txt");
        fs::write(&second, "AB-123,Dubai Taxi\n").unwrap();
        load_dictionary(&second, &session).unwrap();

        let table = session.table();
        assert_eq!(table.get("657014"), None);
        assert_eq!(table.get("ab123"), Some("Dubai Taxi"));
    }

    #[test]
    fn test_load_non_utf8_file() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(&Config::default(), Some(dir.path().join("data"))).unwrap();

        let file = dir.path().join("latin1.txt");
        fs::write(&file, b"657014\tCaf\xe9 Fleet\n").unwrap();
        let report = load_dictionary(&file, &session).unwrap();

        assert_eq!(report.vehicle_count(), 1);
        assert_eq!(session.table().get("657014"), Some("Caf\u{fffd} Fleet"));
    }

    #[test]
    fn test_load_uses_configured_unknown_client() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.engine.unknown_client = "N/A".to_string();
        let session = Session::open(&config, Some(dir.path().join("data"))).unwrap();

        let file = dir.path().join("blank_client.txt");
        fs::write(&file, "657014\t\n").unwrap();
        load_dictionary(&file, &session).unwrap();

        assert_eq!(session.table().get("657014"), Some("N/A"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let session = Session::open(&Config::default(), Some(dir.path().to_path_buf())).unwrap();
        assert!(load_dictionary(&dir.path().join("absent.txt"), &session).is_err());
    }
}

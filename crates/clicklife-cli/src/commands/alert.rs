//! Alert command implementation.

use crate::cli::AlertArgs;
use crate::commands::load::read_text_lossy;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use clicklife_domain::{AlertRequest, AlertResult};
use std::io::{self, Read};

/// Execute the alert command.
pub fn execute_alert(args: AlertArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let tracking_text = read_tracking_text(&args)?;
    let result = generate_alert(&args, tracking_text, session)?;
    println!("{}", formatter.alert(&result)?);
    Ok(())
}

/// Compose an alert for already-read tracking text.
///
/// Uses `--dictionary` when given, the stored dictionary otherwise.
pub fn generate_alert(
    args: &AlertArgs,
    tracking_text: String,
    session: &Session,
) -> Result<AlertResult> {
    let request = AlertRequest::from_raw(tracking_text, &args.alert_type);
    let result = match &args.dictionary {
        Some(path) => {
            let report = session.engine().build_dictionary(&read_text_lossy(path)?);
            session.engine().generate(&request, &report.table)?
        }
        None => session.engine().generate(&request, &session.table())?,
    };
    Ok(result)
}

/// Read tracking text from `--text`, `--file` or stdin.
fn read_tracking_text(args: &AlertArgs) -> Result<String> {
    if let Some(text) = &args.text {
        Ok(text.clone())
    } else if let Some(path) = &args.file {
        read_text_lossy(path)
    } else if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Err(CliError::InvalidInput(
            "Must specify one of --text, --file or --stdin".to_string(),
        ))
    }
}

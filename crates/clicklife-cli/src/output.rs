//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clicklife_domain::{AlertResult, AlertType, LookupTable};
use clicklife_engine::{BuildReport, MatchStage};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a composed alert.
    pub fn alert(&self, result: &AlertResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "client": result.resolved_client,
                "message": result.message,
            }))?),
            OutputFormat::Text => Ok(format!(
                "{} {}\n\n{}",
                self.colorize("Client:", "cyan"),
                result.resolved_client,
                result.message
            )),
            OutputFormat::Quiet => Ok(result.message.clone()),
        }
    }

    /// Format the outcome of loading a dictionary file.
    pub fn load_report(&self, source: &str, report: &BuildReport) -> Result<String> {
        let vehicles = report.vehicle_count();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": source,
                "vehicles": vehicles,
                "lines_read": report.lines_read,
                "header_skipped": report.header_skipped,
                "lines_skipped": report.lines_skipped,
            }))?),
            OutputFormat::Quiet => Ok(vehicles.to_string()),
            OutputFormat::Text if vehicles == 0 => Ok(self.warning(&format!(
                "No vehicles found in {}; the stored dictionary is now empty",
                source
            ))),
            OutputFormat::Text => {
                let mut out = self.success(&format!("Loaded {} vehicle(s) from {}", vehicles, source));
                if report.lines_skipped > 0 {
                    out.push('\n');
                    out.push_str(&self.warning(&format!(
                        "Skipped {} line(s) without a vehicle identifier",
                        report.lines_skipped
                    )));
                }
                Ok(out)
            }
        }
    }

    /// Format a plate resolution.
    pub fn resolution(&self, plate: &str, client: &str, stage: MatchStage) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "plate": plate,
                "client": client,
                "stage": stage.as_str(),
            }))?),
            OutputFormat::Quiet => Ok(client.to_string()),
            OutputFormat::Text if stage == MatchStage::Unresolved => {
                Ok(self.warning(&format!("{} → {}", plate, client)))
            }
            OutputFormat::Text => Ok(format!(
                "{} → {} {}",
                plate,
                self.colorize(client, "green"),
                self.colorize(&format!("(matched by {})", stage), "blue")
            )),
        }
    }

    /// Format the stored dictionary.
    pub fn dictionary(&self, table: &LookupTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: serde_json::Map<String, serde_json::Value> = table
                    .iter()
                    .map(|(vehicle, client)| (vehicle.to_string(), client.into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(table
                .iter()
                .map(|(vehicle, client)| format!("{}\t{}", vehicle, client))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => {
                if table.vehicle_count() == 0 {
                    return Ok(self.colorize("No vehicles loaded.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Vehicle", "Client"]);
                for (vehicle, client) in table.iter() {
                    builder.push_record([vehicle, client]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format the vehicle count.
    pub fn count(&self, table: &LookupTable) -> Result<String> {
        let vehicles = table.vehicle_count();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
                "vehicles": vehicles,
                "entries": table.entry_count(),
            }))?),
            OutputFormat::Quiet => Ok(vehicles.to_string()),
            OutputFormat::Text => Ok(self.info(&format!("{} vehicle(s) loaded", vehicles))),
        }
    }

    /// Format the list of supported alert types.
    pub fn alert_types(&self) -> Result<String> {
        let types = AlertType::all();
        match self.format {
            OutputFormat::Json => {
                let list: Vec<serde_json::Value> = types
                    .iter()
                    .map(|t| serde_json::json!({ "name": t.as_str(), "label": t.label() }))
                    .collect();
                Ok(serde_json::to_string_pretty(&list)?)
            }
            OutputFormat::Quiet => Ok(types
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => {
                let mut builder = Builder::default();
                builder.push_record(["Type", "Label"]);
                for alert_type in &types {
                    builder.push_record([alert_type.as_str(), alert_type.label()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

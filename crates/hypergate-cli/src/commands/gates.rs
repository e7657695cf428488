//! Gate listing and detail command handlers.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use hypergate_lib::Gate;

use crate::commands::load_registry;
use crate::output::OutputFormat;
use crate::terminal::Styles;

/// One row of the gate listing.
#[derive(Debug, Clone, Serialize)]
pub struct GateSummary {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub links: usize,
}

impl GateSummary {
    fn from_gate(gate: &Gate) -> Self {
        Self {
            code: gate.code.clone(),
            name: gate.name.clone(),
            location: gate.location.clone(),
            links: gate.links.len(),
        }
    }
}

/// Handle the gates subcommand: list every gate in the dataset.
pub fn handle_gates_command(gates_file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let registry = load_registry(gates_file)?;
    let summaries: Vec<GateSummary> = registry.iter().map(GateSummary::from_gate).collect();

    match format {
        OutputFormat::Text => {
            let styles = Styles::detect();
            println!(
                "{}{} gates in dataset{}",
                styles.label,
                summaries.len(),
                styles.reset
            );
            for summary in &summaries {
                let location = summary.location.as_deref().unwrap_or("-");
                println!(
                    "{}{:<5}{} {:<24} {:<24} {:>2} links",
                    styles.emphasis,
                    summary.code,
                    styles.reset,
                    summary.name,
                    location,
                    summary.links
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
    }

    Ok(())
}

/// Handle the gate subcommand: show one gate's details and outbound links.
pub fn handle_gate_command(
    gates_file: Option<&Path>,
    format: OutputFormat,
    code: &str,
) -> Result<()> {
    let registry = load_registry(gates_file)?;
    let gate = registry.resolve(code)?;

    match format {
        OutputFormat::Text => {
            let styles = Styles::detect();
            println!(
                "{}{} ({}){}",
                styles.emphasis, gate.name, gate.code, styles.reset
            );
            if let Some(location) = &gate.location {
                println!("{}Location:{} {}", styles.label, styles.reset, location);
            }
            if let Some(description) = &gate.description {
                println!("{}About:{} {}", styles.label, styles.reset, description);
            }
            if gate.links.is_empty() {
                println!("No outbound links.");
            } else {
                println!("{}Outbound links:{}", styles.label, styles.reset);
                for link in &gate.links {
                    println!(
                        "  {} ({})  {}{} hu{}",
                        registry.display_name(&link.code),
                        link.code,
                        styles.value,
                        link.hu,
                        styles.reset
                    );
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(gate)?),
    }

    Ok(())
}

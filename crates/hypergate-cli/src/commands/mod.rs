// CLI subcommand handlers.
//
// Each module owns one subcommand; main.rs only parses arguments and
// dispatches here. Dataset loading is shared by every handler and lives
// in this module.

pub mod gates;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};
use hypergate_lib::{load_gates, resolve_dataset_path, GateRegistry};

/// Resolve the dataset location and load the gate registry.
pub fn load_registry(gates_file: Option<&Path>) -> Result<GateRegistry> {
    let dataset_path =
        resolve_dataset_path(gates_file).context("failed to resolve the gate dataset path")?;
    load_gates(&dataset_path).with_context(|| {
        format!(
            "failed to load gate dataset from {}",
            dataset_path.display()
        )
    })
}

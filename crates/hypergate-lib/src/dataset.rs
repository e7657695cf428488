use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::gates::{Gate, GateRegistry};

/// Default filename for the gate dataset.
pub const DATASET_FILENAME: &str = "gates.json";

/// Environment variable overriding the dataset location.
pub const DATASET_PATH_ENV: &str = "HYPERGATE_GATES_FILE";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "hypergate", "hypergate").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve the dataset path to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `HYPERGATE_GATES_FILE` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATASET_PATH_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_dataset_path()
}

/// Load and validate a gate dataset from a JSON file.
///
/// The file must hold a JSON array of gate records. Duplicate gate codes
/// are rejected here; link weights are validated later when a graph is
/// built from the registry.
pub fn load_gates(path: &Path) -> Result<GateRegistry> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading gate dataset");
    let file = File::open(path)?;
    let records: Vec<Gate> = serde_json::from_reader(BufReader::new(file))?;
    debug!(gates = records.len(), "gate dataset parsed");
    GateRegistry::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let explicit = Path::new("/tmp/somewhere/gates.json");
        let resolved = resolve_dataset_path(Some(explicit)).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn default_path_ends_with_dataset_filename() {
        // Project directories exist on every platform the suite runs on.
        let path = default_dataset_path().unwrap();
        assert!(path.ends_with(DATASET_FILENAME));
    }
}

//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use hypergate_lib::{load_gates, Gate, GateLink, GateRegistry, LinkWeight};

/// Path to the fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the checked-in gate dataset fixture.
#[allow(dead_code)]
pub fn fixture_gates_path() -> PathBuf {
    fixtures_dir().join("gates.json")
}

/// Load the checked-in gate dataset fixture.
#[allow(dead_code)]
pub fn load_fixture_registry() -> GateRegistry {
    load_gates(&fixture_gates_path()).expect("fixture gates.json loads")
}

/// Minimal gate builder for inline networks; the code doubles as the name.
#[allow(dead_code)]
pub fn gate(code: &str, links: &[(&str, f64)]) -> Gate {
    Gate {
        code: code.to_string(),
        name: code.to_string(),
        location: None,
        description: None,
        links: links
            .iter()
            .map(|(target, hu)| GateLink {
                code: target.to_string(),
                hu: LinkWeight::Number(*hu),
            })
            .collect(),
    }
}

/// Registry builder for inline networks.
#[allow(dead_code)]
pub fn registry(gates: Vec<Gate>) -> GateRegistry {
    GateRegistry::from_records(gates).expect("unique gate codes")
}

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Gate codes are short human-readable identifiers ("SOL", "PRX").
pub type GateCode = String;

/// Minimum Jaro-Winkler similarity for a gate to count as a fuzzy match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions attached to an unknown-gate error.
const MAX_SUGGESTIONS: usize = 3;

/// A link weight as it appears on the wire.
///
/// Upstream datasets are inconsistent about whether `hu` is serialized as
/// a JSON number or a string, so both are accepted and conversion to a
/// usable number is deferred until the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkWeight {
    Number(f64),
    Text(String),
}

impl LinkWeight {
    /// Interpret the raw weight as hyperspace units.
    ///
    /// Returns `None` when the value is not parseable as a finite number;
    /// the caller decides whether that is an error. Negative values are
    /// returned as-is so callers can report them distinctly.
    pub fn to_hu(&self) -> Option<f64> {
        match self {
            LinkWeight::Number(value) => Some(*value).filter(|v| v.is_finite()),
            LinkWeight::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
        }
    }
}

impl fmt::Display for LinkWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkWeight::Number(value) => write!(f, "{value}"),
            LinkWeight::Text(raw) => write!(f, "{raw}"),
        }
    }
}

impl From<f64> for LinkWeight {
    fn from(value: f64) -> Self {
        LinkWeight::Number(value)
    }
}

impl From<&str> for LinkWeight {
    fn from(raw: &str) -> Self {
        LinkWeight::Text(raw.to_string())
    }
}

/// A one-way hyperspace link from the owning gate to `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateLink {
    /// Code of the gate this link leads to.
    pub code: GateCode,
    /// Travel cost in hyperspace units.
    pub hu: LinkWeight,
}

/// A single gate record as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub code: GateCode,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub links: Vec<GateLink>,
}

/// All gates from a dataset, indexed by code and kept in dataset order.
///
/// Dataset order matters: route listings break cost ties by the order
/// gates appear in the source file, so the registry preserves it.
#[derive(Debug, Clone)]
pub struct GateRegistry {
    gates: Vec<Gate>,
    index: HashMap<GateCode, usize>,
}

impl GateRegistry {
    /// Build a registry from raw records, rejecting duplicate codes.
    pub fn from_records(records: Vec<Gate>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, gate) in records.iter().enumerate() {
            if index.insert(gate.code.clone(), position).is_some() {
                return Err(Error::DuplicateGate {
                    code: gate.code.clone(),
                });
            }
        }
        Ok(GateRegistry {
            gates: records,
            index,
        })
    }

    pub fn gate_by_code(&self, code: &str) -> Option<&Gate> {
        self.index.get(code).map(|&position| &self.gates[position])
    }

    /// Look up a gate by code, failing with fuzzy suggestions attached.
    pub fn resolve(&self, code: &str) -> Result<&Gate> {
        self.gate_by_code(code).ok_or_else(|| Error::UnknownGate {
            code: code.to_string(),
            suggestions: self
                .fuzzy_gate_matches(code, MAX_SUGGESTIONS)
                .into_iter()
                .map(|gate| gate.code.clone())
                .collect(),
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Human-readable name for a gate code, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.gate_by_code(code)
            .map(|gate| gate.name.as_str())
            .unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Iterate gates in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Gates whose code or name resembles `query`, best matches first.
    ///
    /// Used to build "Did you mean ...?" suggestions when a lookup fails.
    pub fn fuzzy_gate_matches(&self, query: &str, limit: usize) -> Vec<&Gate> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &Gate)> = self
            .gates
            .iter()
            .filter_map(|gate| {
                let by_code = strsim::jaro_winkler(&needle, &gate.code.to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &gate.name.to_lowercase());
                let score = by_code.max(by_name);
                (score >= FUZZY_MATCH_THRESHOLD).then_some((score, gate))
            })
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, gate)| gate).collect()
    }
}

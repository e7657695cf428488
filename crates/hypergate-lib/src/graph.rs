use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::error::{Error, Result};
use crate::gates::GateRegistry;

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: String,
    pub hu: f64,
}

/// Graph structure used by pathfinding algorithms.
///
/// Cloning is cheap: the adjacency map lives behind an `Arc`, so a graph
/// built once can be shared across threads without copying the edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<String, Vec<Edge>>>,
}

impl Graph {
    /// Return the outgoing links for a given gate code.
    pub fn neighbours(&self, code: &str) -> &[Edge] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Canonical key for a gate code, borrowed from the graph itself.
    ///
    /// Search state borrows these keys instead of cloning strings on
    /// every relaxation.
    pub(crate) fn key(&self, code: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(code)
            .map(|(key, _)| key.as_str())
    }
}

/// Build the routing graph for a gate registry.
///
/// Every registered gate gets an adjacency entry, including gates with no
/// outgoing links. Link weights are validated here: weights that cannot be
/// read as a finite, non-negative number fail the whole build, while links
/// pointing at unregistered gates are skipped with a warning.
pub fn build_graph(registry: &GateRegistry) -> Result<Graph> {
    let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::with_capacity(registry.len());

    for gate in registry.iter() {
        let mut edges = Vec::with_capacity(gate.links.len());
        for link in &gate.links {
            let hu = link.hu.to_hu().ok_or_else(|| Error::InvalidLinkWeight {
                gate: gate.code.clone(),
                target: link.code.clone(),
                value: link.hu.to_string(),
            })?;
            if hu < 0.0 {
                return Err(Error::InvalidLinkWeight {
                    gate: gate.code.clone(),
                    target: link.code.clone(),
                    value: link.hu.to_string(),
                });
            }
            if !registry.contains(&link.code) {
                warn!(
                    gate = %gate.code,
                    target = %link.code,
                    "skipping link to unregistered gate"
                );
                continue;
            }
            edges.push(Edge {
                target: link.code.clone(),
                hu,
            });
        }
        adjacency.insert(gate.code.clone(), edges);
    }

    Ok(Graph {
        adjacency: Arc::new(adjacency),
    })
}

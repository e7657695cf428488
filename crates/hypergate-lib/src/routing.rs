use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::gates::GateRegistry;
use crate::graph::build_graph;
use crate::path::{shortest_path, shortest_path_tree};

/// Destination selector for a route query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteTarget {
    /// Rank the cheapest route to every reachable gate.
    #[default]
    Anywhere,
    /// Route to one specific gate.
    Gate(String),
}

/// High-level route query.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub start: String,
    pub target: RouteTarget,
}

impl RouteQuery {
    /// Query for the cheapest routes to every reachable gate.
    pub fn anywhere(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: RouteTarget::Anywhere,
        }
    }

    /// Query for the cheapest route to one specific gate.
    pub fn to_gate(start: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: RouteTarget::Gate(destination.into()),
        }
    }
}

/// A ranked route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub destination_code: String,
    pub destination_name: String,
    pub total_hu: f64,
    pub path: Vec<String>,
}

impl Route {
    /// Number of jumps along the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Compute the cheapest routes for a query against a gate registry.
///
/// Results are sorted ascending by total cost; equal costs keep the
/// dataset order of their destinations, so repeated identical queries
/// return identical output. Unreachable destinations are omitted, and an
/// empty vector means nothing was reachable (or the one requested
/// destination was not). A gate is never routed to itself.
pub fn find_routes(registry: &GateRegistry, query: &RouteQuery) -> Result<Vec<Route>> {
    registry.resolve(&query.start)?;
    if let RouteTarget::Gate(destination) = &query.target {
        registry.resolve(destination)?;
    }

    debug!(start = %query.start, target = ?query.target, "computing routes");
    let graph = build_graph(registry)?;

    match &query.target {
        RouteTarget::Gate(destination) => {
            if destination == &query.start {
                return Ok(Vec::new());
            }
            let Some(found) = shortest_path(&graph, &query.start, destination) else {
                return Ok(Vec::new());
            };
            Ok(vec![route_to(
                registry,
                destination,
                found.total_hu,
                found.path,
            )])
        }
        RouteTarget::Anywhere => {
            let tree = shortest_path_tree(&graph, &query.start);
            let mut routes: Vec<Route> = registry
                .iter()
                .filter(|gate| gate.code != query.start)
                .filter_map(|gate| {
                    let total_hu = tree.cost_to(&gate.code)?;
                    let path = tree.path_to(&gate.code)?;
                    Some(route_to(registry, &gate.code, total_hu, path))
                })
                .collect();
            // Stable sort: equal costs keep dataset order.
            routes.sort_by(|a, b| a.total_hu.total_cmp(&b.total_hu));
            Ok(routes)
        }
    }
}

fn route_to(registry: &GateRegistry, code: &str, total_hu: f64, path: Vec<String>) -> Route {
    Route {
        destination_code: code.to_string(),
        destination_name: registry.display_name(code).to_string(),
        total_hu,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_constructors_set_targets() {
        let all = RouteQuery::anywhere("SOL");
        assert_eq!(all.start, "SOL");
        assert_eq!(all.target, RouteTarget::Anywhere);

        let single = RouteQuery::to_gate("SOL", "PRX");
        assert_eq!(single.start, "SOL");
        assert_eq!(single.target, RouteTarget::Gate("PRX".to_string()));
    }

    #[test]
    fn default_target_is_anywhere() {
        assert_eq!(RouteTarget::default(), RouteTarget::Anywhere);
    }

    #[test]
    fn hop_count_counts_jumps() {
        let route = Route {
            destination_code: "C".to_string(),
            destination_name: "Ceti".to_string(),
            total_hu: 5.0,
            path: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        };
        assert_eq!(route.hop_count(), 2);
    }
}

use std::fmt::Write;

use serde::Serialize;

use crate::gates::GateRegistry;
use crate::routing::Route;

/// Endpoint within a route report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportEndpoint {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ReportEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a route listing that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub start: ReportEndpoint,
    pub routes: Vec<Route>,
}

impl RouteReport {
    /// Bundle ranked routes with their resolved start endpoint.
    pub fn from_routes(registry: &GateRegistry, start_code: &str, routes: Vec<Route>) -> Self {
        let start = ReportEndpoint {
            code: start_code.to_string(),
            name: registry
                .gate_by_code(start_code)
                .map(|gate| gate.name.clone()),
        };
        Self { start, routes }
    }

    /// Render the report as plain text, cheapest route first.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if self.routes.is_empty() {
            let _ = writeln!(
                buffer,
                "No routes found from {} ({}).",
                self.start.display_name(),
                self.start.code
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "Routes from {} ({}), cheapest first:",
            self.start.display_name(),
            self.start.code
        );
        for (index, route) in self.routes.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({})  {} hu  via {}",
                index + 1,
                route.destination_name,
                route.destination_code,
                route.total_hu,
                route.path.join(" -> ")
            );
        }
        buffer
    }
}

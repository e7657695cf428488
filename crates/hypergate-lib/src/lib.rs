//! Hypergate library entry points.
//!
//! This crate exposes helpers to locate and load a hyperspace gate dataset,
//! build the routing graph, and compute cheapest routes between gates. The
//! CLI and any embedding service go through the exports below rather than
//! reaching into individual modules.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod gates;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{default_dataset_path, load_gates, resolve_dataset_path};
pub use error::{Error, ErrorKind, Result};
pub use gates::{Gate, GateCode, GateLink, GateRegistry, LinkWeight};
pub use graph::{build_graph, Edge, Graph};
pub use output::{ReportEndpoint, RouteReport};
pub use path::{shortest_path, shortest_path_tree, SearchResult, ShortestPathTree};
pub use routing::{find_routes, Route, RouteQuery, RouteTarget};
